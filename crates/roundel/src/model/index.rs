//! Index paths for addressing rows in a sectioned model.
//!
//! An [`IndexPath`] is the `(section, row)` pair the host scroll view uses to
//! ask for cells. Like any positional index it is only meaningful against
//! the model it was derived from; after the model is replaced or a section is
//! collapsed, previously obtained paths may no longer be valid.

use std::fmt;
use std::ops::Range;

/// A `(section, row)` position within a [`ListModel`](super::ListModel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    /// The section index.
    pub section: usize,
    /// The row within the section.
    pub row: usize,
}

impl IndexPath {
    /// Creates a new index path.
    #[inline]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Returns the path of another row in the same section.
    #[inline]
    pub const fn sibling(&self, row: usize) -> Self {
        Self {
            section: self.section,
            row,
        }
    }

    /// Expands a row range in `section` into individual paths.
    ///
    /// # Example
    ///
    /// ```
    /// use roundel::model::IndexPath;
    ///
    /// let paths: Vec<_> = IndexPath::range(2, 0..3).collect();
    /// assert_eq!(paths, vec![IndexPath::new(2, 0), IndexPath::new(2, 1), IndexPath::new(2, 2)]);
    /// ```
    pub fn range(section: usize, rows: Range<usize>) -> impl Iterator<Item = IndexPath> {
        rows.map(move |row| IndexPath::new(section, row))
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, row): (usize, usize)) -> Self {
        Self::new(section, row)
    }
}
