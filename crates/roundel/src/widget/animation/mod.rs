//! Compositor-style animation support for Roundel.
//!
//! Animations are evaluated against a media clock rather than stepped per
//! frame. A [`LayerTiming`] maps media time into a layer's local time, which
//! is what makes pausing and resuming a running animation possible without
//! restarting it.
//!
//! # Example
//!
//! ```
//! use roundel::widget::animation::IndicatorAnimator;
//! use roundel_core::ManualClock;
//! use std::time::Duration;
//!
//! let clock = ManualClock::shared();
//! let mut indicator = IndicatorAnimator::new(clock.clone());
//!
//! indicator.start();
//! clock.advance(Duration::from_millis(250));
//! assert!((indicator.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
//! ```

mod indicator;
mod timing;

pub use indicator::{FillMode, IndicatorAnimator, IndicatorState};
pub use timing::LayerTiming;
