//! Roundel - sectioned lists with rounded cards and a pull-to-refresh indicator.
//!
//! This is the main umbrella crate that re-exports the core plumbing alongside
//! the model and widget layers.
//!
//! # Example
//!
//! ```
//! use roundel::model::{Item, ListModel, Payload, Section};
//! use roundel::widget::widgets::ListRenderer;
//! use roundel::widget::{SupplementaryView, TableCell};
//!
//! struct Row;
//! impl TableCell for Row {
//!     fn configure(&mut self, _data: &Payload) {}
//! }
//!
//! struct Title;
//! impl SupplementaryView for Title {
//!     fn configure(&mut self, _data: Option<&Payload>) {}
//! }
//!
//! let mut table = ListRenderer::new(ListModel::new(vec![
//!     Section::new(vec![Item::with_value("row", 1), Item::with_value("row", 2)])
//!         .with_header("title"),
//! ]));
//! table.register_cell("row", || Box::new(Row));
//! table.register_supplementary("title", || Box::new(Title));
//!
//! table.toggle(0).unwrap();
//! assert_eq!(table.row_count(0).unwrap(), 0);
//! ```

pub use roundel_core::*;

pub mod config;
mod error;
pub mod model;
pub mod prelude;
pub mod widget;

pub use error::{Result, TableError};
