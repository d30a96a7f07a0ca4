//! Collapse/expand state machine for sections.
//!
//! Each section is either `Expanded` (initial) or `Collapsed`. A toggle flips
//! the state recorded in the [`ListModel`] and produces exactly one
//! [`RowUpdate`]: a removal of the section's rows when collapsing, an
//! insertion when expanding. The update is also emitted through the model's
//! signals so the host can animate it.
//!
//! # Toggles during an animation
//!
//! With an animated [`RowAnimation`] the section stays in flight until the
//! host reports the animation finished. Toggles arriving in the meantime are
//! not applied against a half-animated table; they are recorded with parity
//! coalescing (two pending toggles cancel out) and at most one is applied when
//! the animation finishes.

use std::collections::BTreeSet;

use roundel_core::logging::targets;

use crate::error::Result;
use crate::model::{ListModel, RowAnimation, RowUpdate, SectionState};

/// Result of a toggle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The section changed state; the host should animate this update.
    Applied(RowUpdate),
    /// An animation for the section is still running; the toggle was queued.
    Deferred,
}

impl ToggleOutcome {
    /// The applied update, if any.
    pub fn update(&self) -> Option<&RowUpdate> {
        match self {
            ToggleOutcome::Applied(update) => Some(update),
            ToggleOutcome::Deferred => None,
        }
    }
}

/// Drives section state changes and tracks in-flight row animations.
#[derive(Debug, Default)]
pub struct SectionVisibility {
    animation: RowAnimation,
    in_flight: BTreeSet<usize>,
    pending: BTreeSet<usize>,
}

impl SectionVisibility {
    /// Creates a state machine that requests `animation` for every update.
    pub fn new(animation: RowAnimation) -> Self {
        Self {
            animation,
            in_flight: BTreeSet::new(),
            pending: BTreeSet::new(),
        }
    }

    /// The row animation requested for updates.
    pub fn animation(&self) -> RowAnimation {
        self.animation
    }

    /// Change the row animation used for later toggles.
    pub fn set_animation(&mut self, animation: RowAnimation) {
        self.animation = animation;
    }

    /// Returns true while the host is animating a toggle of `section`.
    pub fn is_in_flight(&self, section: usize) -> bool {
        self.in_flight.contains(&section)
    }

    /// Returns true if a toggle of `section` is waiting for its animation.
    pub fn has_pending(&self, section: usize) -> bool {
        self.pending.contains(&section)
    }

    /// Toggle `section` between expanded and collapsed.
    ///
    /// # Errors
    ///
    /// [`TableError::SectionOutOfRange`](crate::TableError::SectionOutOfRange)
    /// for an invalid section. The model is left unchanged.
    pub fn toggle(&mut self, model: &mut ListModel, section: usize) -> Result<ToggleOutcome> {
        model.section(section)?;

        if self.in_flight.contains(&section) {
            if !self.pending.remove(&section) {
                self.pending.insert(section);
            }
            tracing::debug!(
                target: targets::TABLE,
                section,
                pending = self.pending.contains(&section),
                "toggle deferred until row animation finishes"
            );
            return Ok(ToggleOutcome::Deferred);
        }

        self.apply(model, section).map(ToggleOutcome::Applied)
    }

    /// Report that the host finished animating `section`.
    ///
    /// Applies the pending toggle for that section, if one is left after
    /// coalescing, and returns its update.
    pub fn finish_animation(
        &mut self,
        model: &mut ListModel,
        section: usize,
    ) -> Result<Option<RowUpdate>> {
        self.in_flight.remove(&section);
        if self.pending.remove(&section) {
            self.apply(model, section).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Forget every in-flight animation and pending toggle.
    ///
    /// Used when the model is replaced and section indices lose their meaning.
    pub fn reset(&mut self) {
        self.in_flight.clear();
        self.pending.clear();
    }

    fn apply(&mut self, model: &mut ListModel, section: usize) -> Result<RowUpdate> {
        let rows = 0..model.section(section)?.len();
        let state = model.state(section)?.toggled();
        model.set_state(section, state)?;

        let update = match state {
            SectionState::Collapsed => RowUpdate::remove(section, rows, self.animation),
            SectionState::Expanded => RowUpdate::insert(section, rows, self.animation),
        };
        if self.animation.is_animated() {
            self.in_flight.insert(section);
        }

        tracing::debug!(
            target: targets::TABLE,
            section,
            ?state,
            rows = update.len(),
            "section toggled"
        );

        model.signals().emit_row_update(update.clone());
        model.signals().section_toggled.emit((section, state));
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, RowUpdateKind, Section};
    use crate::TableError;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn model() -> ListModel {
        ListModel::new(vec![
            Section::new((0..3).map(|i| Item::with_value("row", i)).collect()).with_header("h"),
            Section::new(Vec::new()).with_header("h"),
        ])
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut model = model();
        let mut visibility = SectionVisibility::new(RowAnimation::None);

        let collapse = visibility.toggle(&mut model, 0).unwrap();
        assert_eq!(
            collapse,
            ToggleOutcome::Applied(RowUpdate::remove(0, 0..3, RowAnimation::None))
        );
        assert_eq!(model.row_count(0).unwrap(), 0);
        assert!(model.is_collapsed(0));

        let expand = visibility.toggle(&mut model, 0).unwrap();
        assert_eq!(expand.update().map(|u| u.kind), Some(RowUpdateKind::Insert));
        assert_eq!(model.row_count(0).unwrap(), 3);
        assert!(!model.is_collapsed(0));
    }

    #[test]
    fn test_empty_section_still_toggles() {
        let mut model = model();
        let mut visibility = SectionVisibility::new(RowAnimation::None);

        let outcome = visibility.toggle(&mut model, 1).unwrap();
        let update = outcome.update().unwrap();
        assert_eq!(update.kind, RowUpdateKind::Remove);
        assert!(update.is_empty());
        assert!(model.is_collapsed(1));
    }

    #[test]
    fn test_invalid_section() {
        let mut model = model();
        let mut visibility = SectionVisibility::default();
        assert_eq!(
            visibility.toggle(&mut model, 5),
            Err(TableError::section_out_of_range(5, 2))
        );
    }

    #[test]
    fn test_toggle_emits_signals() {
        let mut model = model();
        let events = Arc::new(Mutex::new(Vec::new()));

        let removed = events.clone();
        model.signals().rows_removed.connect(move |update| {
            removed.lock().push(format!("removed {}:{:?}", update.section, update.rows));
        });
        let toggled = events.clone();
        model.signals().section_toggled.connect(move |(section, state)| {
            toggled.lock().push(format!("toggled {section} {state:?}"));
        });

        SectionVisibility::new(RowAnimation::Fade)
            .toggle(&mut model, 0)
            .unwrap();

        assert_eq!(
            *events.lock(),
            vec!["removed 0:0..3".to_string(), "toggled 0 Collapsed".to_string()]
        );
    }

    #[test]
    fn test_toggle_during_animation_is_deferred() {
        let mut model = model();
        let mut visibility = SectionVisibility::new(RowAnimation::Fade);

        visibility.toggle(&mut model, 0).unwrap();
        assert!(visibility.is_in_flight(0));

        assert_eq!(visibility.toggle(&mut model, 0).unwrap(), ToggleOutcome::Deferred);
        assert!(model.is_collapsed(0));
        assert!(visibility.has_pending(0));

        let update = visibility.finish_animation(&mut model, 0).unwrap().unwrap();
        assert_eq!(update.kind, RowUpdateKind::Insert);
        assert!(!model.is_collapsed(0));
        assert!(visibility.is_in_flight(0));

        assert_eq!(visibility.finish_animation(&mut model, 0).unwrap(), None);
        assert!(!visibility.is_in_flight(0));
    }

    #[test]
    fn test_pending_toggles_coalesce_by_parity() {
        let mut model = model();
        let mut visibility = SectionVisibility::new(RowAnimation::Automatic);

        visibility.toggle(&mut model, 0).unwrap();
        visibility.toggle(&mut model, 0).unwrap();
        visibility.toggle(&mut model, 0).unwrap();
        assert!(!visibility.has_pending(0));

        assert_eq!(visibility.finish_animation(&mut model, 0).unwrap(), None);
        assert!(model.is_collapsed(0));
    }

    #[test]
    fn test_other_sections_are_not_blocked() {
        let mut model = model();
        let mut visibility = SectionVisibility::new(RowAnimation::Fade);

        visibility.toggle(&mut model, 0).unwrap();
        let outcome = visibility.toggle(&mut model, 1).unwrap();
        assert!(matches!(outcome, ToggleOutcome::Applied(_)));
    }
}
