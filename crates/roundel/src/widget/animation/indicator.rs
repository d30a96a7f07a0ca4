//! Circular progress indicator animation.
//!
//! The indicator has a single rotation slot holding one of two animations:
//!
//! - a **spin**: one full turn per period, repeating forever, started by
//!   [`IndicatorAnimator::start`] while content is loading;
//! - a **drag rotation**: a short, non-repeating turn towards an angle derived
//!   from the pull progress, installed by [`IndicatorAnimator::rotate`] while
//!   the user is dragging.
//!
//! Stopping pauses the layer's local time instead of removing the spin, so a
//! later start continues from the angle the indicator stopped at.

use std::f64::consts::{PI, TAU};

use roundel_core::SharedClock;
use roundel_core::logging::targets;

use super::timing::LayerTiming;
use crate::config::RefreshConfig;

/// What a finished, non-repeating animation leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Hold the target value after the animation ends.
    Forwards,
    /// Return to the resting value after the animation ends.
    Backwards,
}

/// Observable animation state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorState {
    /// True while the spin is running.
    pub is_animating: bool,
    /// Layer-local time at which a stopped spin was frozen.
    pub rotation_paused_at: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
enum Rotation {
    Spin {
        added_at: f64,
        base: f64,
        period: f64,
    },
    Drag {
        added_at: f64,
        duration: f64,
        from: f64,
        to: f64,
        fill: FillMode,
    },
}

impl Rotation {
    fn angle(&self, local: f64) -> f64 {
        match *self {
            Rotation::Spin {
                added_at,
                base,
                period,
            } => {
                let elapsed = (local - added_at).max(0.0);
                (base + TAU * elapsed / period).rem_euclid(TAU)
            }
            Rotation::Drag {
                added_at,
                duration,
                from,
                to,
                fill,
            } => {
                let elapsed = (local - added_at).max(0.0);
                if elapsed < duration {
                    from + (to - from) * elapsed / duration
                } else {
                    match fill {
                        FillMode::Forwards => to,
                        FillMode::Backwards => 0.0,
                    }
                }
            }
        }
    }
}

/// Drives the rotation and opacity of a circular loading indicator.
///
/// All methods are cheap and idempotent within a frame; the angle is computed
/// on demand from the media clock.
pub struct IndicatorAnimator {
    clock: SharedClock,
    config: RefreshConfig,
    layer: LayerTiming,
    rotation: Option<Rotation>,
    state: IndicatorState,
    opacity: f32,
}

impl IndicatorAnimator {
    /// Creates an idle indicator with the default timing.
    pub fn new(clock: SharedClock) -> Self {
        Self::with_config(clock, RefreshConfig::default())
    }

    /// Creates an idle indicator with custom timing and opacity mapping.
    pub fn with_config(clock: SharedClock, config: RefreshConfig) -> Self {
        Self {
            clock,
            config: config.sanitized(),
            layer: LayerTiming::default(),
            rotation: None,
            state: IndicatorState::default(),
            opacity: 0.0,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    /// Returns the current animation state.
    pub fn state(&self) -> IndicatorState {
        self.state
    }

    /// Returns true while the spin is running.
    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    /// Returns true if the rotation slot holds the spin, running or paused.
    pub fn has_spin(&self) -> bool {
        matches!(self.rotation, Some(Rotation::Spin { .. }))
    }

    /// Current rotation angle in radians.
    pub fn angle(&self) -> f64 {
        let local = self.layer.local_time(self.now());
        self.rotation.map_or(0.0, |rotation| rotation.angle(local))
    }

    /// Current opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Start spinning, or resume a stopped spin from its paused angle.
    ///
    /// Does nothing while already spinning.
    pub fn start(&mut self) {
        if self.state.is_animating {
            return;
        }

        let now = self.now();
        if self.has_spin() && self.state.rotation_paused_at.is_some() {
            self.layer.resume(now);
            tracing::debug!(target: targets::REFRESH, "indicator spin resumed");
        } else {
            let base = self.angle();
            self.layer = LayerTiming::default();
            self.rotation = Some(Rotation::Spin {
                added_at: self.layer.local_time(now),
                base,
                period: self.config.spin_period_secs,
            });
            tracing::debug!(target: targets::REFRESH, base, "indicator spin started");
        }

        self.state = IndicatorState {
            is_animating: true,
            rotation_paused_at: None,
        };
    }

    /// Freeze the spin at its current angle.
    ///
    /// Does nothing when not spinning.
    pub fn stop(&mut self) {
        if !self.state.is_animating {
            return;
        }

        let paused = self.layer.pause(self.now());
        self.state = IndicatorState {
            is_animating: false,
            rotation_paused_at: Some(paused),
        };
        tracing::debug!(target: targets::REFRESH, paused, "indicator spin stopped");
    }

    /// Turn towards the angle for a pull `progress` while the user drags.
    ///
    /// Ignored while spinning. Progress above 2 wraps back by 2 so the
    /// indicator keeps turning on long pulls; the target angle is
    /// `π · progress`. Negative progress settles back at rest when the turn
    /// ends, non-negative progress holds the target.
    pub fn rotate(&mut self, progress: f64) {
        if self.state.is_animating {
            return;
        }

        let progress = if progress.is_finite() { progress } else { 0.0 };
        let value = if progress > 2.0 { progress - 2.0 } else { progress };
        let fill = if progress < 0.0 {
            FillMode::Backwards
        } else {
            FillMode::Forwards
        };

        let from = self.angle();
        let now = self.now();
        self.layer = LayerTiming::default();
        self.rotation = Some(Rotation::Drag {
            added_at: self.layer.local_time(now),
            duration: self.config.drag_rotation_secs,
            from,
            to: PI * value,
            fill,
        });
        self.state.rotation_paused_at = None;
        tracing::trace!(target: targets::REFRESH, progress, ?fill, "indicator drag rotation");
    }

    /// Opacity for a pull distance, without storing it.
    ///
    /// Maps `[opacity_start, opacity_end]` linearly onto `[0, 1]`; clamped
    /// unless the configuration disables it.
    pub fn opacity_for_pull(&self, pull: f32) -> f32 {
        if !pull.is_finite() {
            return 0.0;
        }
        let RefreshConfig {
            opacity_start,
            opacity_end,
            clamp_opacity,
            ..
        } = self.config;
        let opacity = (pull - opacity_start) / (opacity_end - opacity_start);
        if clamp_opacity {
            opacity.clamp(0.0, 1.0)
        } else {
            opacity
        }
    }

    /// Update the opacity from a pull distance and return it.
    pub fn set_pull(&mut self, pull: f32) -> f32 {
        self.opacity = self.opacity_for_pull(pull);
        self.opacity
    }

    fn now(&self) -> f64 {
        self.clock.now().as_secs_f64()
    }
}

impl std::fmt::Debug for IndicatorAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorAnimator")
            .field("layer", &self.layer)
            .field("rotation", &self.rotation)
            .field("state", &self.state)
            .field("opacity", &self.opacity)
            .finish()
    }
}

static_assertions::assert_impl_all!(IndicatorAnimator: Send, Sync);
