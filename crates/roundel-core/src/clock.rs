//! Media clock for compositor-driven animations.
//!
//! Animations in Roundel are evaluated against a monotonic *media time*
//! rather than against frame counters, mirroring how a compositor drives
//! layer animations. The clock is a trait so the UI thread can use the real
//! monotonic clock while tests step time by hand.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A monotonic source of media time.
///
/// `now()` returns the elapsed time since the clock's origin. Successive calls
/// never go backwards.
pub trait MediaClock: Send + Sync {
    /// Current media time.
    fn now(&self) -> Duration;
}

/// A shared, type-erased clock handle.
pub type SharedClock = Arc<dyn MediaClock>;

/// Media clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Create a shared handle to a new system clock.
    pub fn shared() -> SharedClock {
        Arc::new(Self::new())
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaClock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// # Example
///
/// ```
/// use roundel_core::clock::{ManualClock, MediaClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.now(), Duration::from_millis(250));
/// ```
#[derive(Default)]
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    /// Create a clock at media time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared manual clock. Keep the returned `Arc<ManualClock>` to
    /// drive it and hand out clones as [`SharedClock`].
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }

    /// Jump to an absolute media time. Earlier times are ignored.
    pub fn set(&self, to: Duration) {
        let mut now = self.now.lock();
        if to > *now {
            *now = to;
        }
    }
}

impl MediaClock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock").field("now", &self.now()).finish()
    }
}
