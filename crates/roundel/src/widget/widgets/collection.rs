//! Grid data source over the sectioned model.
//!
//! [`CollectionRenderer`] serves a host grid from the same [`ListModel`] and
//! [`ReuseCatalog`] machinery as the table renderer, without rounding or
//! collapsing. Item counts are forgiving: an invalid section simply has no
//! items.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use roundel_core::logging::targets;

use crate::error::{Result, TableError};
use crate::model::{
    DefaultTableDelegate, IndexPath, ListModel, ModelSignals, ReuseCatalog, ReuseKey, Section,
    TableDelegate,
};
use crate::widget::TableCell;

/// Spacing between grid items.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridSpacing {
    /// Minimum gap between items in the same line.
    pub interitem: f32,
    /// Minimum gap between lines.
    pub line: f32,
}

/// Data source for a sectioned grid.
pub struct CollectionRenderer {
    model: ListModel,
    delegate: Arc<dyn TableDelegate>,
    spacing: GridSpacing,
    cells: ReuseCatalog<dyn TableCell>,
    visible: HashMap<IndexPath, (ReuseKey, Box<dyn TableCell>)>,
}

impl Default for CollectionRenderer {
    fn default() -> Self {
        Self::new(ListModel::default())
    }
}

impl CollectionRenderer {
    /// Creates a grid renderer over `model` with zero spacing.
    pub fn new(model: ListModel) -> Self {
        Self {
            model,
            delegate: Arc::new(DefaultTableDelegate::new()),
            spacing: GridSpacing::default(),
            cells: ReuseCatalog::new(),
            visible: HashMap::new(),
        }
    }

    /// Set the delegate using builder pattern.
    pub fn with_delegate(mut self, delegate: Arc<dyn TableDelegate>) -> Self {
        self.delegate = delegate;
        self
    }

    /// Set the spacing using builder pattern.
    pub fn with_spacing(mut self, spacing: GridSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Returns the item spacing.
    pub fn spacing(&self) -> GridSpacing {
        self.spacing
    }

    /// Register the factory for item views with reuse key `key`.
    pub fn register_cell<F>(&mut self, key: impl Into<ReuseKey>, factory: F)
    where
        F: Fn() -> Box<dyn TableCell> + Send + Sync + 'static,
    {
        self.cells.register_template(key, factory);
    }

    /// Returns the model.
    pub fn model(&self) -> &ListModel {
        &self.model
    }

    /// Returns the model's signals.
    pub fn signals(&self) -> &ModelSignals {
        self.model.signals()
    }

    /// Replace every section, recycling on-screen items.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        for (_, (key, view)) in self.visible.drain() {
            self.cells.recycle(key, view);
        }
        self.model.set_sections(sections);
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.model.section_count()
    }

    /// Number of items in `section`, or zero if it does not exist.
    pub fn item_count(&self, section: usize) -> usize {
        self.model.section(section).map_or(0, Section::len)
    }

    /// Dequeue and configure the item view for `path`.
    pub fn cell_at(&mut self, path: IndexPath) -> Result<&mut (dyn TableCell + 'static)> {
        let result = self.dequeue(path);
        if let Err(err) = &result {
            tracing::warn!(target: targets::TABLE, %path, %err, "grid item query failed");
        }
        result
    }

    /// Return the item view at `path` to its pool.
    pub fn end_displaying(&mut self, path: IndexPath) -> bool {
        match self.visible.remove(&path) {
            Some((key, view)) => {
                self.cells.recycle(key, view);
                true
            }
            None => false,
        }
    }

    fn dequeue(&mut self, path: IndexPath) -> Result<&mut (dyn TableCell + 'static)> {
        let item = self
            .model
            .section(path.section)?
            .items
            .get(path.row)
            .ok_or_else(|| {
                TableError::row_out_of_range(path.section, path.row, self.item_count(path.section))
            })?;
        let mut view = self.cells.dequeue(&item.id)?;
        self.delegate.configure_cell(view.as_mut(), item, path);

        let fresh = (item.id.clone(), view);
        let (_, view) = match self.visible.entry(path) {
            Entry::Occupied(mut occupied) => {
                let (key, previous) = occupied.insert(fresh);
                self.cells.recycle(key, previous);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(fresh),
        };
        Ok(view.as_mut())
    }
}

impl std::fmt::Debug for CollectionRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionRenderer")
            .field("model", &self.model)
            .field("spacing", &self.spacing)
            .field("visible", &self.visible.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, Payload};

    struct Tile(Option<u32>);

    impl TableCell for Tile {
        fn configure(&mut self, data: &Payload) {
            self.0 = data.downcast_ref::<u32>().copied();
        }
    }

    fn grid() -> CollectionRenderer {
        let mut grid = CollectionRenderer::new(ListModel::new(vec![
            Section::new((0..4_u32).map(|i| Item::with_value("tile", i)).collect()),
            Section::new(Vec::new()),
        ]))
        .with_spacing(GridSpacing { interitem: 4.0, line: 8.0 });
        grid.register_cell("tile", || Box::new(Tile(None)));
        grid
    }

    #[test]
    fn test_item_count_is_forgiving() {
        let grid = grid();
        assert_eq!(grid.section_count(), 2);
        assert_eq!(grid.item_count(0), 4);
        assert_eq!(grid.item_count(1), 0);
        assert_eq!(grid.item_count(7), 0);
        assert_eq!(grid.spacing().line, 8.0);
    }

    #[test]
    fn test_cell_at_configures_and_recycles() {
        let mut grid = grid();
        assert!(grid.cell_at(IndexPath::new(0, 2)).is_ok());
        assert!(grid.end_displaying(IndexPath::new(0, 2)));
        assert!(grid.cell_at(IndexPath::new(0, 3)).is_ok());
        assert_eq!(grid.cells.created_count(), 1);
        assert_eq!(grid.visible[&IndexPath::new(0, 3)].0.as_str(), "tile");
    }

    #[test]
    fn test_cell_at_errors() {
        let mut grid = grid();
        assert_eq!(
            grid.cell_at(IndexPath::new(1, 0)).err(),
            Some(TableError::row_out_of_range(1, 0, 0))
        );
        assert_eq!(
            grid.cell_at(IndexPath::new(2, 0)).err(),
            Some(TableError::section_out_of_range(2, 2))
        );
    }
}
