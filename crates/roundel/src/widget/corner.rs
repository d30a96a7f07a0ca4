//! Neighbor-aware rounded-corner policy.
//!
//! A section renders as a single rounded card: its header, rows and footer are
//! stacked views, and only the outermost edges of the stack are rounded. The
//! functions here decide which corners each view rounds from its position in
//! the section and from which neighbors take part in rounding.
//!
//! All of them are pure and cheap; the renderer re-derives the result on every
//! call because collapsing a section changes its visible row count without
//! changing its items.

use std::fmt;

/// Subset of a rectangle's four corners that are drawn rounded.
///
/// # Example
///
/// ```
/// use roundel::widget::CornerSet;
///
/// let corners = CornerSet::TOP_LEFT | CornerSet::TOP_RIGHT;
/// assert_eq!(corners, CornerSet::TOP);
/// assert!(CornerSet::ALL.contains(CornerSet::BOTTOM));
/// assert!(CornerSet::EMPTY.is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CornerSet(u8);

impl CornerSet {
    /// No rounded corners.
    pub const EMPTY: Self = Self(0);
    /// Top-left corner.
    pub const TOP_LEFT: Self = Self(1 << 0);
    /// Top-right corner.
    pub const TOP_RIGHT: Self = Self(1 << 1);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Self = Self(1 << 2);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self(1 << 3);
    /// Both top corners.
    pub const TOP: Self = Self(Self::TOP_LEFT.0 | Self::TOP_RIGHT.0);
    /// Both bottom corners.
    pub const BOTTOM: Self = Self(Self::BOTTOM_LEFT.0 | Self::BOTTOM_RIGHT.0);
    /// Every corner.
    pub const ALL: Self = Self(Self::TOP.0 | Self::BOTTOM.0);

    /// Returns true if every corner in `other` is also in `self`.
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns true if at least one corner is shared with `other`.
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns true if no corner is rounded.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw 4-bit representation.
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for CornerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::EMPTY => "EMPTY",
            Self::TOP => "TOP",
            Self::BOTTOM => "BOTTOM",
            Self::ALL => "ALL",
            Self::TOP_LEFT => "TOP_LEFT",
            Self::TOP_RIGHT => "TOP_RIGHT",
            Self::BOTTOM_LEFT => "BOTTOM_LEFT",
            Self::BOTTOM_RIGHT => "BOTTOM_RIGHT",
            _ => return write!(f, "CornerSet({:#06b})", self.0),
        };
        write!(f, "CornerSet::{name}")
    }
}

impl std::ops::BitOr for CornerSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for CornerSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl std::ops::BitOrAssign for CornerSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Corners of the cell at `row` in a section showing `row_count` rows.
///
/// `has_header` and `has_footer` are true when the section's header or footer
/// view itself takes part in rounding; the cell then leaves that edge square.
pub fn cell_corners(row: usize, row_count: usize, has_header: bool, has_footer: bool) -> CornerSet {
    let first = row == 0;
    let last = row + 1 >= row_count;

    if first && last && !has_header && !has_footer {
        CornerSet::ALL
    } else if first && !has_header {
        CornerSet::TOP
    } else if last && !has_footer {
        CornerSet::BOTTOM
    } else {
        CornerSet::EMPTY
    }
}

/// Corners of a section header given the section's visible row count.
pub fn header_corners(visible_rows: usize, has_footer: bool) -> CornerSet {
    if has_footer || visible_rows > 0 {
        CornerSet::TOP
    } else {
        CornerSet::ALL
    }
}

/// Corners of a section footer given the section's visible row count.
pub fn footer_corners(visible_rows: usize, has_header: bool) -> CornerSet {
    if has_header || visible_rows > 0 {
        CornerSet::BOTTOM
    } else {
        CornerSet::ALL
    }
}

/// Whether the separator under `row` is hidden. Only the last row hides it.
pub fn separator_hidden(row: usize, row_count: usize) -> bool {
    row + 1 >= row_count
}
