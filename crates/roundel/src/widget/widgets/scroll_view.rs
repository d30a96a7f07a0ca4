//! Host scroll view state.
//!
//! [`ScrollView`] is the minimal model of a platform scroll widget that the
//! refresh machinery observes: a content offset, content insets and a signal
//! fired whenever either changes.

use std::sync::Arc;

use roundel_core::Signal;

/// Insets around scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    /// Creates insets from each edge.
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// Snapshot of a scroll view's position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Horizontal content offset.
    pub offset_x: f32,
    /// Vertical content offset. Negative while pulled down past the top.
    pub offset_y: f32,
    /// Content insets.
    pub inset: EdgeInsets,
}

impl ScrollMetrics {
    /// Content offset measured from the inset edges: `(x + left, y + top)`.
    pub fn normalized_offset(&self) -> (f32, f32) {
        (
            self.offset_x + self.inset.left,
            self.offset_y + self.inset.top,
        )
    }
}

/// A scrollable viewport that publishes its offset.
///
/// # Signals
///
/// - `offset_changed(ScrollMetrics)`: emitted after the offset or insets change
pub struct ScrollView {
    metrics: ScrollMetrics,

    /// Emitted after the content offset or insets change.
    ///
    /// Held in an `Arc` so observers can use scoped connections.
    pub offset_changed: Arc<Signal<ScrollMetrics>>,
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollView {
    /// Creates a scroll view at offset zero with no insets.
    pub fn new() -> Self {
        Self {
            metrics: ScrollMetrics::default(),
            offset_changed: Arc::new(Signal::new()),
        }
    }

    /// Set the content insets using builder pattern.
    pub fn with_content_inset(mut self, inset: EdgeInsets) -> Self {
        self.metrics.inset = inset;
        self
    }

    /// Current offset and insets.
    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    /// Content offset measured from the inset edges.
    pub fn normalized_offset(&self) -> (f32, f32) {
        self.metrics.normalized_offset()
    }

    /// Move the content to `(x, y)`.
    pub fn set_content_offset(&mut self, x: f32, y: f32) {
        let next = ScrollMetrics {
            offset_x: x,
            offset_y: y,
            ..self.metrics
        };
        self.update(next);
    }

    /// Change the content insets.
    pub fn set_content_inset(&mut self, inset: EdgeInsets) {
        let next = ScrollMetrics {
            inset,
            ..self.metrics
        };
        self.update(next);
    }

    fn update(&mut self, next: ScrollMetrics) {
        if next != self.metrics {
            self.metrics = next;
            self.offset_changed.emit(next);
        }
    }
}

impl std::fmt::Debug for ScrollView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollView")
            .field("metrics", &self.metrics)
            .field("observers", &self.offset_changed.connection_count())
            .finish()
    }
}
