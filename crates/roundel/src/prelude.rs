//! Prelude module for Roundel.
//!
//! ```
//! use roundel::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot system (`Signal`, `ConnectionGuard`)
//! - The sectioned model (`ListModel`, `Section`, `Item`, `Payload`)
//! - View capabilities (`TableCell`, `SupplementaryView`, `Rounded`, ...)
//! - Renderers and the refresh control

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::signal::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::{RefreshConfig, RoundelConfig, TableStyle};
pub use crate::TableError;

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    DefaultTableDelegate, IndexPath, Item, ListModel, Payload, ReuseKey, RowAnimation, RowUpdate,
    RowUpdateKind, Section, SectionState, TableDelegate,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    CollectionRenderer, EdgeInsets, ListRenderer, RefreshControl, ScrollView, SectionDimension,
};
pub use crate::widget::{
    CornerSet, Expandable, Rounded, RoundedCell, ScrollObserver, ScrollProgress, SupplementaryView,
    TableCell, ToggleAction, ToggleOutcome,
};

// ============================================================================
// Time
// ============================================================================

pub use crate::clock::{ManualClock, MediaClock, SharedClock, SystemClock};
