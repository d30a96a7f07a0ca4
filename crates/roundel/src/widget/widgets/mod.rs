//! Concrete widgets for Roundel.
//!
//! - [`ListRenderer`]: sectioned table data source with rounded section cards
//! - [`CollectionRenderer`]: sectioned grid data source
//! - [`ScrollView`]: host scroll view state with an offset signal
//! - [`RefreshControl`]: pull-to-refresh with a spinning indicator

mod collection;
mod list_renderer;
mod refresh_control;
mod scroll_view;

pub use collection::{CollectionRenderer, GridSpacing};
pub use list_renderer::{ListRenderer, SectionDimension};
pub use refresh_control::RefreshControl;
pub use scroll_view::{EdgeInsets, ScrollMetrics, ScrollView};
