//! View capabilities consumed by the renderer.
//!
//! Views are owned by the renderer as boxed trait objects. Optional behavior
//! is discovered through capability queries ([`TableCell::as_roundable`],
//! [`SupplementaryView::as_expandable`], ...) that return `None` when a view
//! does not opt in; the renderer never inspects concrete types.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::corner::CornerSet;
use crate::model::Payload;

/// A view that can draw a subset of its corners rounded.
pub trait Rounded {
    /// Apply the rounded corners and the radius to use for them.
    fn set_corners(&mut self, corners: CornerSet, radius: f32);
}

/// A rounded row view that also owns the separator drawn beneath it.
pub trait RoundedCell: Rounded {
    /// Show or hide the separator under this row.
    fn set_separator_hidden(&mut self, hidden: bool);
}

/// A header or footer that can collapse and expand its section.
pub trait Expandable {
    /// Bind the action to fire when the user asks to toggle the section.
    fn set_toggle_action(&mut self, action: ToggleAction);

    /// Reflect the section's current state, e.g. by rotating a chevron.
    fn update(&mut self, collapsed: bool);
}

/// A recyclable row view.
pub trait TableCell: Send {
    /// Fill the view with an item's payload.
    fn configure(&mut self, data: &Payload);

    /// Called each time the view is about to appear on screen.
    fn display(&mut self) {}

    /// Rounded-corner capability, if supported.
    fn as_roundable(&mut self) -> Option<&mut dyn RoundedCell> {
        None
    }
}

/// A recyclable section header or footer view.
pub trait SupplementaryView: Send {
    /// Fill the view with the section's payload, if it has one.
    fn configure(&mut self, data: Option<&Payload>);

    /// Rounded-corner capability, if supported.
    fn as_roundable(&mut self) -> Option<&mut dyn Rounded> {
        None
    }

    /// Collapse/expand capability, if supported.
    fn as_expandable(&mut self) -> Option<&mut dyn Expandable> {
        None
    }
}

/// Pending section toggles requested by views.
///
/// The renderer owns the queue; views only hold [`ToggleAction`]s with a weak
/// reference to it, so a view that outlives its renderer fires into nothing.
#[derive(Default)]
pub struct ToggleQueue {
    pending: Arc<Mutex<VecDeque<usize>>>,
}

impl ToggleQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an action that requests a toggle of `section`.
    pub fn action(&self, section: usize) -> ToggleAction {
        ToggleAction {
            section,
            queue: Arc::downgrade(&self.pending),
        }
    }

    /// Number of requests waiting to be applied.
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Returns true if no requests are waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }

    /// Take every pending request in the order they were made.
    pub fn drain(&self) -> Vec<usize> {
        self.pending.lock().drain(..).collect()
    }
}

impl fmt::Debug for ToggleQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleQueue")
            .field("pending", &self.len())
            .finish()
    }
}

/// Typed handle an expandable view calls when the user taps it.
#[derive(Clone)]
pub struct ToggleAction {
    section: usize,
    queue: Weak<Mutex<VecDeque<usize>>>,
}

impl ToggleAction {
    /// The section this action toggles.
    pub fn section(&self) -> usize {
        self.section
    }

    /// Request a toggle. Returns false if the renderer is gone.
    pub fn trigger(&self) -> bool {
        match self.queue.upgrade() {
            Some(queue) => {
                queue.lock().push_back(self.section);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleAction")
            .field("section", &self.section)
            .field("live", &(self.queue.strong_count() > 0))
            .finish()
    }
}

static_assertions::assert_impl_all!(ToggleAction: Send, Sync);
