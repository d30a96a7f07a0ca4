//! Pull progress derived from a scroll view's offset.
//!
//! [`ScrollObserver`] subscribes to a [`ScrollView`]'s offset stream and
//! republishes it as a [`ScrollProgress`]:
//!
//! ```text
//! normalized = offset_y + inset.top
//! pull       = -(normalized + lead_inset)
//! progress   = pull / zone_height
//! ```
//!
//! It also keeps the highest progress seen since the last reset.

use std::sync::Arc;

use parking_lot::Mutex;
use roundel_core::logging::targets;
use roundel_core::{ConnectionGuard, Signal};

use super::widgets::{ScrollMetrics, ScrollView};
use crate::config::{self, RefreshConfig};

/// Progress of a pull-down gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollProgress {
    /// Distance pulled past the lead inset, in points.
    pub pull: f32,
    /// `pull` as a fraction of the refresh zone height.
    pub progress: f32,
    /// Highest `progress` since the last reset.
    pub max_progress: f32,
}

#[derive(Debug)]
struct Tracker {
    lead_inset: f32,
    zone_height: f32,
    latest: ScrollProgress,
}

impl Tracker {
    fn update(&mut self, metrics: &ScrollMetrics) -> ScrollProgress {
        let (_, normalized) = metrics.normalized_offset();
        let normalized = if normalized.is_finite() { normalized } else { 0.0 };
        let pull = -(normalized + self.lead_inset);
        let progress = pull / self.zone_height;

        self.latest = ScrollProgress {
            pull,
            progress,
            max_progress: self.latest.max_progress.max(progress),
        };
        self.latest
    }
}

/// Observes one scroll view at a time and publishes pull progress.
///
/// # Signals
///
/// - `progress_changed(ScrollProgress)`: emitted for every offset update of the
///   observed view, and once when a view is attached
pub struct ScrollObserver {
    tracker: Arc<Mutex<Tracker>>,
    subscription: Option<ConnectionGuard<ScrollMetrics>>,

    /// Emitted with the new progress after each offset update.
    pub progress_changed: Arc<Signal<ScrollProgress>>,
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new(&RefreshConfig::default())
    }
}

impl ScrollObserver {
    /// Creates a detached observer using the geometry in `config`.
    pub fn new(config: &RefreshConfig) -> Self {
        let config = config.sanitized();
        Self {
            tracker: Arc::new(Mutex::new(Tracker {
                lead_inset: config.lead_inset,
                zone_height: config.zone_height,
                latest: ScrollProgress::default(),
            })),
            subscription: None,
            progress_changed: Arc::new(Signal::new()),
        }
    }

    /// Observe `view`, or stop observing with `None`.
    ///
    /// The previous subscription is released before the new one is made, and
    /// the view's current offset is delivered once right away.
    pub fn set_scroll_view(&mut self, view: Option<&ScrollView>) {
        self.subscription = None;
        let Some(view) = view else {
            tracing::debug!(target: targets::REFRESH, "scroll observer detached");
            return;
        };

        let tracker = self.tracker.clone();
        let progress_changed = self.progress_changed.clone();
        self.subscription = Some(view.offset_changed.connect_scoped(move |metrics| {
            publish(&tracker, &progress_changed, metrics);
        }));
        tracing::debug!(target: targets::REFRESH, "scroll observer attached");

        publish(&self.tracker, &self.progress_changed, &view.metrics());
    }

    /// Returns true while subscribed to a scroll view.
    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    /// The most recent progress.
    pub fn progress(&self) -> ScrollProgress {
        self.tracker.lock().latest
    }

    /// Highest progress since the last reset.
    pub fn max_progress(&self) -> f32 {
        self.tracker.lock().latest.max_progress
    }

    /// Reset the highest progress seen so far to 0.
    pub fn reset_high_water_mark(&self) {
        self.tracker.lock().latest.max_progress = 0.0;
    }

    /// Change the refresh zone height. Non-positive heights are clamped.
    pub fn set_zone_height(&self, height: f32) {
        self.tracker.lock().zone_height = config::positive(height);
    }
}

impl std::fmt::Debug for ScrollObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollObserver")
            .field("tracker", &*self.tracker.lock())
            .field("observing", &self.is_observing())
            .finish()
    }
}

fn publish(tracker: &Mutex<Tracker>, signal: &Signal<ScrollProgress>, metrics: &ScrollMetrics) {
    let progress = tracker.lock().update(metrics);
    tracing::trace!(
        target: targets::REFRESH,
        pull = progress.pull,
        progress = progress.progress,
        "scroll progress"
    );
    signal.emit(progress);
}

static_assertions::assert_impl_all!(ScrollObserver: Send, Sync);
