//! Row update descriptions and the model's change signals.

use std::ops::Range;

use roundel_core::Signal;
use serde::Deserialize;

use super::index::IndexPath;
use super::list_model::SectionState;

/// How the host should animate inserted or removed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAnimation {
    /// Apply the change immediately.
    None,
    /// Cross-fade rows in or out.
    #[default]
    Fade,
    /// Let the host pick a suitable animation.
    Automatic,
}

impl RowAnimation {
    /// Returns `true` if the host will run an animation with a completion.
    pub fn is_animated(self) -> bool {
        !matches!(self, RowAnimation::None)
    }
}

/// Whether rows are being added or taken away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowUpdateKind {
    /// Rows become visible.
    Insert,
    /// Rows disappear.
    Remove,
}

/// A contiguous row range to insert or remove in one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowUpdate {
    pub kind: RowUpdateKind,
    pub section: usize,
    pub rows: Range<usize>,
    pub animation: RowAnimation,
}

impl RowUpdate {
    /// Describe an insertion of `rows` into `section`.
    pub fn insert(section: usize, rows: Range<usize>, animation: RowAnimation) -> Self {
        Self {
            kind: RowUpdateKind::Insert,
            section,
            rows,
            animation,
        }
    }

    /// Describe a removal of `rows` from `section`.
    pub fn remove(section: usize, rows: Range<usize>, animation: RowAnimation) -> Self {
        Self {
            kind: RowUpdateKind::Remove,
            section,
            rows,
            animation,
        }
    }

    /// Number of rows affected.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no rows are affected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The affected rows as index paths.
    pub fn index_paths(&self) -> impl Iterator<Item = IndexPath> + use<> {
        IndexPath::range(self.section, self.rows.clone())
    }
}

/// Collection of signals emitted by the section model and renderer.
///
/// - **Before/after replacement**: `model_about_to_reset`, `model_reset`
/// - **Collapse/expand**: `rows_removed` or `rows_inserted`, then `section_toggled`
pub struct ModelSignals {
    /// Emitted just before the sections are replaced.
    pub model_about_to_reset: Signal<()>,

    /// Emitted after the sections have been replaced.
    pub model_reset: Signal<()>,

    /// Emitted when rows become visible.
    pub rows_inserted: Signal<RowUpdate>,

    /// Emitted when rows stop being visible.
    pub rows_removed: Signal<RowUpdate>,

    /// Emitted after a section changes state.
    /// Args: (section, new state)
    pub section_toggled: Signal<(usize, SectionState)>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
            rows_inserted: Signal::new(),
            rows_removed: Signal::new(),
            section_toggled: Signal::new(),
        }
    }

    /// Emits signals for a model reset.
    ///
    /// Calls the provided function between the about_to_reset and reset signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.model_about_to_reset.emit(());
        reset_fn();
        self.model_reset.emit(());
    }

    /// Routes a row update to `rows_inserted` or `rows_removed`.
    pub fn emit_row_update(&self, update: RowUpdate) {
        match update.kind {
            RowUpdateKind::Insert => self.rows_inserted.emit(update),
            RowUpdateKind::Remove => self.rows_removed.emit(update),
        }
    }
}
