//! Typed configuration for tables and the refresh control.
//!
//! Every field has a default, so a configuration file only needs the keys it
//! changes:
//!
//! ```
//! use roundel::config::RoundelConfig;
//! use roundel::model::RowAnimation;
//!
//! let config = RoundelConfig::from_toml_str(r#"
//! [table]
//! corner_radius = 8.0
//! row_animation = "none"
//!
//! [refresh]
//! zone_height = 80.0
//! "#).unwrap();
//!
//! assert_eq!(config.table.corner_radius, 8.0);
//! assert_eq!(config.table.row_animation, RowAnimation::None);
//! assert_eq!(config.refresh.zone_height, 80.0);
//! assert_eq!(config.refresh.lead_inset, 20.0);
//! ```

use roundel_core::ConfigError;
use serde::Deserialize;

use crate::model::RowAnimation;

/// Smallest value accepted for heights and durations after sanitizing.
const MIN_POSITIVE: f32 = 1e-3;

/// Appearance of sectioned tables.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Radius applied to every rounded corner, in points.
    pub corner_radius: f32,
    /// Animation requested for collapse/expand row updates.
    pub row_animation: RowAnimation,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            corner_radius: 12.0,
            row_animation: RowAnimation::Fade,
        }
    }
}

impl TableStyle {
    /// Set the corner radius using builder pattern.
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the row animation using builder pattern.
    pub fn with_row_animation(mut self, animation: RowAnimation) -> Self {
        self.row_animation = animation;
        self
    }
}

/// Geometry and timing of the pull-to-refresh indicator.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Pull distance swallowed before progress starts counting.
    pub lead_inset: f32,
    /// Height of the refresh zone; a pull of this length is progress 1.
    pub zone_height: f32,
    /// Pull distance at which the indicator starts fading in.
    pub opacity_start: f32,
    /// Pull distance at which the indicator is fully opaque.
    pub opacity_end: f32,
    /// Clamp opacity to `[0, 1]` instead of extrapolating.
    pub clamp_opacity: bool,
    /// Duration of one full turn of the loading spin.
    pub spin_period_secs: f64,
    /// Duration of the rotation that follows the finger while dragging.
    pub drag_rotation_secs: f64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            lead_inset: 20.0,
            zone_height: 60.0,
            opacity_start: 38.0,
            opacity_end: 150.0,
            clamp_opacity: true,
            spin_period_secs: 1.0,
            drag_rotation_secs: 0.1,
        }
    }
}

impl RefreshConfig {
    /// Set the zone height using builder pattern.
    pub fn with_zone_height(mut self, height: f32) -> Self {
        self.zone_height = height;
        self
    }

    /// Set whether opacity is clamped using builder pattern.
    pub fn with_clamp_opacity(mut self, clamp: bool) -> Self {
        self.clamp_opacity = clamp;
        self
    }

    /// Copy with degenerate values replaced by usable ones.
    ///
    /// Non-finite or non-positive heights and durations become a small
    /// positive value, and an empty opacity range is widened to one point.
    pub fn sanitized(self) -> Self {
        let opacity_start = finite_or(self.opacity_start, 38.0);
        let mut opacity_end = finite_or(self.opacity_end, 150.0);
        if opacity_end <= opacity_start {
            opacity_end = opacity_start + 1.0;
        }

        Self {
            lead_inset: finite_or(self.lead_inset, 20.0),
            zone_height: positive(self.zone_height),
            opacity_start,
            opacity_end,
            clamp_opacity: self.clamp_opacity,
            spin_period_secs: positive_secs(self.spin_period_secs),
            drag_rotation_secs: positive_secs(self.drag_rotation_secs),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("refresh.zone_height", f64::from(self.zone_height)),
            ("refresh.spin_period_secs", self.spin_period_secs),
            ("refresh.drag_rotation_secs", self.drag_rotation_secs),
        ];
        for (key, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("expected a positive number, found {value}"),
                });
            }
        }
        if self.opacity_end <= self.opacity_start {
            return Err(ConfigError::InvalidValue {
                key: "refresh.opacity_end".to_string(),
                message: format!(
                    "must be greater than opacity_start ({})",
                    self.opacity_start
                ),
            });
        }
        Ok(())
    }
}

/// Complete toolkit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RoundelConfig {
    /// Table appearance.
    pub table: TableStyle,
    /// Refresh indicator behavior.
    pub refresh: RefreshConfig,
}

impl RoundelConfig {
    /// Parse a configuration from TOML text.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML or mistyped values,
    /// [`ConfigError::InvalidValue`] for values outside their domain.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if !config.table.corner_radius.is_finite() || config.table.corner_radius < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "table.corner_radius".to_string(),
                message: format!("expected a non-negative number, found {}", config.table.corner_radius),
            });
        }
        config.refresh.validate()?;
        Ok(config)
    }

    /// Copy with every degenerate value replaced by a usable one.
    pub fn sanitized(self) -> Self {
        Self {
            table: TableStyle {
                corner_radius: if self.table.corner_radius.is_finite() {
                    self.table.corner_radius.max(0.0)
                } else {
                    0.0
                },
                row_animation: self.table.row_animation,
            },
            refresh: self.refresh.sanitized(),
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

/// `value` if it is a positive number, otherwise a small positive stand-in.
pub(crate) fn positive(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        MIN_POSITIVE
    }
}

fn positive_secs(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        f64::from(MIN_POSITIVE)
    }
}
