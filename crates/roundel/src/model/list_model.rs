//! The sectioned list model.
//!
//! [`ListModel`] holds the application's sections together with the set of
//! collapsed section indices. The sections are supplied wholesale and are
//! treated as immutable; the only state the engine mutates itself is the
//! collapsed set, which survives re-renders of the same model.
//!
//! # Threading
//!
//! The model is owned by a renderer and mutated through `&mut self` on the UI
//! thread only. It is not meant to be shared with background tasks.

use std::collections::BTreeSet;

use roundel_core::logging::targets;

use super::index::IndexPath;
use super::section::{Item, Section};
use super::traits::ModelSignals;
use crate::error::{Result, TableError};

/// Visibility state of a section's rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionState {
    /// Rows are shown (initial state).
    #[default]
    Expanded,
    /// Rows are hidden; header and footer stay visible.
    Collapsed,
}

impl SectionState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            SectionState::Expanded => SectionState::Collapsed,
            SectionState::Collapsed => SectionState::Expanded,
        }
    }

    /// Returns `true` for [`SectionState::Collapsed`].
    pub fn is_collapsed(self) -> bool {
        matches!(self, SectionState::Collapsed)
    }
}

/// Ordered sections plus the collapsed-section set.
///
/// # Example
///
/// ```
/// use roundel::model::{Item, ListModel, Section};
///
/// let model = ListModel::new(vec![
///     Section::new(vec![Item::with_value("row", "Wi-Fi"), Item::with_value("row", "Bluetooth")])
///         .with_header("title"),
/// ]);
///
/// assert_eq!(model.section_count(), 1);
/// assert_eq!(model.row_count(0).unwrap(), 2);
/// assert!(model.row_count(1).is_err());
/// ```
#[derive(Default)]
pub struct ListModel {
    sections: Vec<Section>,
    collapsed: BTreeSet<usize>,
    signals: ModelSignals,
}

impl ListModel {
    /// Creates a model with every section expanded.
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            collapsed: BTreeSet::new(),
            signals: ModelSignals::new(),
        }
    }

    /// Returns the signals for this model.
    pub fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    /// All sections in render order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// The section at `section`.
    ///
    /// # Errors
    ///
    /// [`TableError::SectionOutOfRange`] for an invalid index.
    pub fn section(&self, section: usize) -> Result<&Section> {
        self.sections
            .get(section)
            .ok_or_else(|| TableError::section_out_of_range(section, self.sections.len()))
    }

    /// Number of rows currently shown in `section`: zero while collapsed,
    /// otherwise its item count.
    ///
    /// # Errors
    ///
    /// [`TableError::SectionOutOfRange`] for an invalid index.
    pub fn row_count(&self, section: usize) -> Result<usize> {
        let items = self.section(section)?.len();
        Ok(if self.collapsed.contains(&section) { 0 } else { items })
    }

    /// The item shown at `path`.
    ///
    /// # Errors
    ///
    /// [`TableError::SectionOutOfRange`] or [`TableError::RowOutOfRange`]
    /// when `path` is not currently displayed. Rows of a collapsed section are
    /// out of range.
    pub fn item(&self, path: IndexPath) -> Result<&Item> {
        let count = self.row_count(path.section)?;
        if path.row >= count {
            return Err(TableError::row_out_of_range(path.section, path.row, count));
        }
        Ok(&self.sections[path.section].items[path.row])
    }

    /// Current state of `section`.
    ///
    /// # Errors
    ///
    /// [`TableError::SectionOutOfRange`] for an invalid index.
    pub fn state(&self, section: usize) -> Result<SectionState> {
        self.section(section)?;
        Ok(if self.collapsed.contains(&section) {
            SectionState::Collapsed
        } else {
            SectionState::Expanded
        })
    }

    /// Returns `true` if `section` is collapsed. Invalid indices are never
    /// collapsed.
    pub fn is_collapsed(&self, section: usize) -> bool {
        self.collapsed.contains(&section)
    }

    /// Collapsed section indices in ascending order.
    pub fn collapsed_sections(&self) -> impl Iterator<Item = usize> + '_ {
        self.collapsed.iter().copied()
    }

    /// Replace every section at once.
    ///
    /// Collapsed indices that still name a section are kept; the rest are
    /// evicted.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        let signals = &self.signals;
        let collapsed = &mut self.collapsed;
        let current = &mut self.sections;
        signals.emit_reset(|| {
            *current = sections;
            let count = current.len();
            let before = collapsed.len();
            collapsed.retain(|&section| section < count);
            let evicted = before - collapsed.len();
            if evicted > 0 {
                tracing::debug!(target: targets::MODEL, evicted, "evicted stale collapsed sections");
            }
        });
    }

    /// Record the state of `section`. Returns `true` if it changed.
    ///
    /// Only [`SectionVisibility`](crate::widget::SectionVisibility) should call
    /// this; it pairs every change with the matching row update.
    pub(crate) fn set_state(&mut self, section: usize, state: SectionState) -> Result<bool> {
        self.section(section)?;
        Ok(match state {
            SectionState::Collapsed => self.collapsed.insert(section),
            SectionState::Expanded => self.collapsed.remove(&section),
        })
    }
}

impl std::fmt::Debug for ListModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListModel")
            .field("sections", &self.sections.len())
            .field("collapsed", &self.collapsed)
            .finish()
    }
}
