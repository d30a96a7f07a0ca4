//! Application hooks for configuring recycled views.
//!
//! The renderer owns view lifetimes; a [`TableDelegate`] only fills views in
//! with data. Every hook has a default that forwards the opaque payload to the
//! view's own `configure`, so most applications can use
//! [`DefaultTableDelegate`] and put their rendering logic in the view types.
//!
//! # Example
//!
//! ```
//! use roundel::model::{IndexPath, Item, TableDelegate};
//! use roundel::widget::TableCell;
//!
//! struct Highlighting;
//!
//! impl TableDelegate for Highlighting {
//!     fn configure_cell(&self, cell: &mut dyn TableCell, item: &Item, path: IndexPath) {
//!         cell.configure(&item.data);
//!         tracing::trace!(%path, "configured");
//!     }
//! }
//! ```

use super::index::IndexPath;
use super::section::{Item, Section};
use crate::widget::{SupplementaryView, TableCell};

/// Hooks invoked by the renderer at each step of a view's appearance.
pub trait TableDelegate: Send + Sync {
    /// Fill a freshly dequeued cell with the item at `path`.
    fn configure_cell(&self, cell: &mut dyn TableCell, item: &Item, path: IndexPath) {
        let _ = path;
        cell.configure(&item.data);
    }

    /// Fill a dequeued header view for `section`.
    ///
    /// Corners and the expandable binding have already been applied.
    fn configure_header(&self, view: &mut dyn SupplementaryView, section: &Section, index: usize) {
        let _ = index;
        view.configure(section.data.as_ref());
    }

    /// Fill a dequeued footer view for `section`.
    fn configure_footer(&self, view: &mut dyn SupplementaryView, section: &Section, index: usize) {
        let _ = index;
        view.configure(section.data.as_ref());
    }

    /// Called once each time a configured cell is about to appear, after
    /// corners and separator visibility are applied.
    fn display(&self, cell: &mut dyn TableCell, item: &Item, path: IndexPath) {
        let _ = (item, path);
        cell.display();
    }
}

/// Delegate that uses every default hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTableDelegate;

impl DefaultTableDelegate {
    /// Creates the default delegate.
    pub fn new() -> Self {
        Self
    }
}

impl TableDelegate for DefaultTableDelegate {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Payload;

    #[derive(Default)]
    struct Recording {
        configured: Option<i32>,
        displays: usize,
    }

    impl TableCell for Recording {
        fn configure(&mut self, data: &Payload) {
            self.configured = data.downcast_ref::<i32>().copied();
        }

        fn display(&mut self) {
            self.displays += 1;
        }
    }

    #[test]
    fn test_default_delegate_forwards_payload() {
        let delegate = DefaultTableDelegate::new();
        let item = Item::with_value("row", 7_i32);
        let mut cell = Recording::default();

        delegate.configure_cell(&mut cell, &item, IndexPath::new(0, 0));
        delegate.display(&mut cell, &item, IndexPath::new(0, 0));
        delegate.display(&mut cell, &item, IndexPath::new(0, 0));

        assert_eq!(cell.configured, Some(7));
        assert_eq!(cell.displays, 2);
    }
}
