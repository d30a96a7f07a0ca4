//! Sectioned list model for Roundel.
//!
//! This module holds everything the renderer needs to know about the
//! application's data, independent of any view:
//!
//! - [`Section`] and [`Item`]: the tree supplied by the application, with
//!   opaque [`Payload`]s
//! - [`ListModel`]: the sections plus the collapsed-section set
//! - [`ReuseCatalog`]: keyed pools of recyclable views
//! - [`RowUpdate`] and [`ModelSignals`]: change notifications for the host
//! - [`TableDelegate`]: hooks that fill views with data
//!
//! # Example
//!
//! ```
//! use roundel::model::{IndexPath, Item, ListModel, Section};
//!
//! let model = ListModel::new(vec![
//!     Section::new(vec![Item::with_value("row", 1_u32), Item::with_value("row", 2_u32)])
//!         .with_header("title"),
//! ]);
//!
//! model.signals().model_reset.connect(|_| println!("reloaded"));
//!
//! let item = model.item(IndexPath::new(0, 1)).unwrap();
//! assert_eq!(item.data.downcast_ref::<u32>(), Some(&2));
//! ```

mod delegate;
mod index;
mod list_model;
mod reuse;
mod section;
mod traits;

pub use delegate::{DefaultTableDelegate, TableDelegate};
pub use index::IndexPath;
pub use list_model::{ListModel, SectionState};
pub use reuse::{ReuseCatalog, ReuseKey, ViewFactory};
pub use section::{Item, Payload, Section};
pub use traits::{ModelSignals, RowAnimation, RowUpdate, RowUpdateKind};
