//! Widget layer for Roundel.
//!
//! This module turns the sectioned model into styled, recycled views and
//! drives the pull-to-refresh indicator:
//!
//! - [`corner`]: which corners of a cell, header or footer are rounded
//! - [`TableCell`], [`SupplementaryView`] and their capabilities
//!   ([`Rounded`], [`RoundedCell`], [`Expandable`])
//! - [`SectionVisibility`]: the collapse/expand state machine
//! - [`ScrollObserver`]: pull progress from a scroll view's offset
//! - [`animation`]: the indicator's spin and drag rotation
//! - [`widgets`]: the renderers, the scroll view and the refresh control
//!
//! # Implementing a view
//!
//! Views opt into behavior by returning themselves from capability queries:
//!
//! ```
//! use roundel::model::Payload;
//! use roundel::widget::{CornerSet, Rounded, RoundedCell, TableCell};
//!
//! #[derive(Default)]
//! struct CardRow {
//!     corners: CornerSet,
//!     separator_hidden: bool,
//! }
//!
//! impl TableCell for CardRow {
//!     fn configure(&mut self, _data: &Payload) {}
//!
//!     fn as_roundable(&mut self) -> Option<&mut dyn RoundedCell> {
//!         Some(self)
//!     }
//! }
//!
//! impl Rounded for CardRow {
//!     fn set_corners(&mut self, corners: CornerSet, _radius: f32) {
//!         self.corners = corners;
//!     }
//! }
//!
//! impl RoundedCell for CardRow {
//!     fn set_separator_hidden(&mut self, hidden: bool) {
//!         self.separator_hidden = hidden;
//!     }
//! }
//! ```

pub mod animation;
pub mod corner;
mod scroll_observer;
mod views;
mod visibility;
pub mod widgets;

pub use corner::CornerSet;
pub use scroll_observer::{ScrollObserver, ScrollProgress};
pub use views::{
    Expandable, Rounded, RoundedCell, SupplementaryView, TableCell, ToggleAction, ToggleQueue,
};
pub use visibility::{SectionVisibility, ToggleOutcome};
