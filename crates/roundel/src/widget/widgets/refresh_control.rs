//! Pull-to-refresh control with a spinning indicator.
//!
//! [`RefreshControl`] wires a [`ScrollObserver`] to an [`IndicatorAnimator`]:
//! while the user pulls, the indicator fades in and turns with the pull; while
//! content loads, it spins.
//!
//! # Example
//!
//! ```
//! use roundel::widget::widgets::{RefreshControl, ScrollView};
//! use roundel_core::ManualClock;
//!
//! let clock = ManualClock::shared();
//! let mut scroll_view = ScrollView::new();
//! let mut refresh = RefreshControl::new(clock.clone());
//! refresh.set_scroll_view(Some(&scroll_view));
//!
//! refresh.refresh_started.connect(|_| println!("reload data"));
//!
//! scroll_view.set_content_offset(0.0, -114.0);
//! assert_eq!(refresh.opacity(), 0.5);
//!
//! refresh.begin_refreshing();
//! assert!(refresh.is_spinning());
//! refresh.end_refreshing();
//! assert!(!refresh.is_refreshing());
//! ```

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use roundel_core::logging::targets;
use roundel_core::{ConnectionGuard, SharedClock, Signal};

use super::scroll_view::ScrollView;
use crate::config::RefreshConfig;
use crate::widget::animation::IndicatorAnimator;
use crate::widget::{ScrollObserver, ScrollProgress};

/// Pull-to-refresh control.
///
/// # Signals
///
/// - `refresh_started()`: emitted when refreshing begins
/// - `refresh_ended()`: emitted when refreshing ends
pub struct RefreshControl {
    observer: ScrollObserver,
    indicator: Arc<Mutex<IndicatorAnimator>>,
    refreshing: bool,
    _progress_link: ConnectionGuard<ScrollProgress>,

    /// Emitted when refreshing begins.
    pub refresh_started: Signal<()>,
    /// Emitted when refreshing ends.
    pub refresh_ended: Signal<()>,
}

impl RefreshControl {
    /// Creates a control with the default geometry and timing.
    pub fn new(clock: SharedClock) -> Self {
        Self::with_config(clock, RefreshConfig::default())
    }

    /// Creates a control with custom geometry and timing.
    pub fn with_config(clock: SharedClock, config: RefreshConfig) -> Self {
        let observer = ScrollObserver::new(&config);
        let indicator = Arc::new(Mutex::new(IndicatorAnimator::with_config(clock, config)));

        let driven = indicator.clone();
        let progress_link = observer.progress_changed.connect_scoped(move |progress| {
            let mut indicator = driven.lock();
            indicator.set_pull(progress.pull);
            indicator.rotate(f64::from(progress.progress));
        });

        Self {
            observer,
            indicator,
            refreshing: false,
            _progress_link: progress_link,
            refresh_started: Signal::new(),
            refresh_ended: Signal::new(),
        }
    }

    /// Attach to `view`, or detach with `None`.
    pub fn set_scroll_view(&mut self, view: Option<&ScrollView>) {
        self.observer.set_scroll_view(view);
    }

    /// Returns the scroll observer.
    pub fn observer(&self) -> &ScrollObserver {
        &self.observer
    }

    /// Lock and return the indicator.
    ///
    /// Scroll updates lock the same indicator, so drop the guard before moving
    /// the observed scroll view or the update deadlocks. Prefer
    /// [`angle`](Self::angle), [`opacity`](Self::opacity) and
    /// [`is_spinning`](Self::is_spinning) for plain reads.
    pub fn indicator(&self) -> MutexGuard<'_, IndicatorAnimator> {
        self.indicator.lock()
    }

    /// Current indicator angle in radians.
    pub fn angle(&self) -> f64 {
        self.indicator.lock().angle()
    }

    /// Current indicator opacity.
    pub fn opacity(&self) -> f32 {
        self.indicator.lock().opacity()
    }

    /// Returns true while the indicator spins.
    pub fn is_spinning(&self) -> bool {
        self.indicator.lock().is_animating()
    }

    /// Returns true between `begin_refreshing` and `end_refreshing`.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Start refreshing: spin the indicator and emit `refresh_started`.
    pub fn begin_refreshing(&mut self) {
        if self.refreshing {
            return;
        }
        self.refreshing = true;
        self.indicator.lock().start();
        tracing::debug!(target: targets::REFRESH, "refresh started");
        self.refresh_started.emit(());
    }

    /// Stop refreshing: freeze the indicator, forget the pull high-water mark
    /// and emit `refresh_ended`.
    pub fn end_refreshing(&mut self) {
        if !self.refreshing {
            return;
        }
        self.refreshing = false;
        self.indicator.lock().stop();
        self.observer.reset_high_water_mark();
        tracing::debug!(target: targets::REFRESH, "refresh ended");
        self.refresh_ended.emit(());
    }
}

impl std::fmt::Debug for RefreshControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshControl")
            .field("observer", &self.observer)
            .field("refreshing", &self.refreshing)
            .finish()
    }
}
