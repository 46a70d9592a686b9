// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables shared by placement, touch sizing and dismissal.

use core::fmt;

/// Placement and dismissal tunables.
///
/// All lengths are CSS pixels. The defaults match the dashboard's stock
/// behavior; use the builder-style setters to adjust and
/// [`PlacementConfig::validate`] before handing a user-supplied config to a
/// [`crate::TooltipPlacer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementConfig {
    /// Gap between the anchor point and the nearest tooltip edge (default: 12).
    pub cursor_gap: f64,
    /// Inset from the visible viewport edge used by touch sizing (default: 12).
    pub viewport_margin: f64,
    /// Largest share of the visible height a touch tooltip may take (default: 0.7).
    pub max_height_fraction: f64,
    /// Pinch-zoom level up to which the touch render scale stays `1.0` (default: 1.2).
    pub max_effective_zoom: f64,
    /// Smallest touch render scale (default: 0.5).
    pub min_touch_scale: f64,
    /// Visual viewport scale from which a touch viewport counts as zoomed (default: 1.05).
    pub zoomed_scale_min: f64,
    /// Scroll distance that dismisses a touch tooltip when not zoomed (default: 2).
    pub tap_max_scroll_px: f64,
    /// Upper bound of the zoom-aware dismiss threshold (default: 12).
    pub zoomed_dismiss_max_scroll_px: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            cursor_gap: 12.0,
            viewport_margin: 12.0,
            max_height_fraction: 0.7,
            max_effective_zoom: 1.2,
            min_touch_scale: 0.5,
            zoomed_scale_min: 1.05,
            tap_max_scroll_px: 2.0,
            zoomed_dismiss_max_scroll_px: 12.0,
        }
    }
}

impl PlacementConfig {
    /// Set the anchor gap.
    #[must_use]
    pub fn cursor_gap(mut self, px: f64) -> Self {
        self.cursor_gap = px;
        self
    }

    /// Set the viewport margin.
    #[must_use]
    pub fn viewport_margin(mut self, px: f64) -> Self {
        self.viewport_margin = px;
        self
    }

    /// Set the maximum height fraction.
    #[must_use]
    pub fn max_height_fraction(mut self, fraction: f64) -> Self {
        self.max_height_fraction = fraction;
        self
    }

    /// Set the zoom ceiling below which touch scale is neutral.
    #[must_use]
    pub fn max_effective_zoom(mut self, zoom: f64) -> Self {
        self.max_effective_zoom = zoom;
        self
    }

    /// Set the touch render scale floor.
    #[must_use]
    pub fn min_touch_scale(mut self, scale: f64) -> Self {
        self.min_touch_scale = scale;
        self
    }

    /// Set the zoomed-viewport scale threshold.
    #[must_use]
    pub fn zoomed_scale_min(mut self, scale: f64) -> Self {
        self.zoomed_scale_min = scale;
        self
    }

    /// Set the non-zoomed dismiss threshold.
    #[must_use]
    pub fn tap_max_scroll_px(mut self, px: f64) -> Self {
        self.tap_max_scroll_px = px;
        self
    }

    /// Set the cap of the zoomed dismiss threshold.
    #[must_use]
    pub fn zoomed_dismiss_max_scroll_px(mut self, px: f64) -> Self {
        self.zoomed_dismiss_max_scroll_px = px;
        self
    }

    /// Checks that every tunable is usable, returning the config unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking fields in declaration order.
    pub fn validate(self) -> Result<Self, ConfigError> {
        non_negative("cursor_gap", self.cursor_gap)?;
        non_negative("viewport_margin", self.viewport_margin)?;
        if !(self.max_height_fraction > 0.0 && self.max_height_fraction <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "max_height_fraction",
                value: self.max_height_fraction,
            });
        }
        if !(self.max_effective_zoom.is_finite() && self.max_effective_zoom >= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "max_effective_zoom",
                value: self.max_effective_zoom,
            });
        }
        if !(self.min_touch_scale > 0.0 && self.min_touch_scale <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "min_touch_scale",
                value: self.min_touch_scale,
            });
        }
        if !(self.zoomed_scale_min.is_finite() && self.zoomed_scale_min >= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "zoomed_scale_min",
                value: self.zoomed_scale_min,
            });
        }
        non_negative("tap_max_scroll_px", self.tap_max_scroll_px)?;
        non_negative(
            "zoomed_dismiss_max_scroll_px",
            self.zoomed_dismiss_max_scroll_px,
        )?;
        if self.tap_max_scroll_px > self.zoomed_dismiss_max_scroll_px {
            return Err(ConfigError::InvertedThresholds {
                tap: self.tap_max_scroll_px,
                zoomed_max: self.zoomed_dismiss_max_scroll_px,
            });
        }
        Ok(self)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeLength { field, value })
    }
}

/// Error returned by [`PlacementConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A pixel length is negative, NaN or infinite.
    NegativeLength {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A ratio or scale lies outside its allowed range.
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The non-zoomed dismiss threshold exceeds the zoomed cap.
    InvertedThresholds {
        /// `tap_max_scroll_px`.
        tap: f64,
        /// `zoomed_dismiss_max_scroll_px`.
        zoomed_max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLength { field, value } => {
                write!(f, "`{field}` must be a finite, non-negative length, got {value}")
            }
            Self::OutOfRange { field, value } => {
                write!(f, "`{field}` is out of range: {value}")
            }
            Self::InvertedThresholds { tap, zoomed_max } => write!(
                f,
                "tap dismiss threshold {tap}px exceeds zoomed threshold cap {zoomed_max}px"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::{ConfigError, PlacementConfig};

    #[test]
    fn default_config_is_valid() {
        let config = PlacementConfig::default();
        assert_eq!(config.validate(), Ok(config));
    }

    #[test]
    fn builder_setters_override_fields() {
        let config = PlacementConfig::default()
            .cursor_gap(8.0)
            .viewport_margin(4.0)
            .min_touch_scale(0.25);
        assert_eq!(config.cursor_gap, 8.0);
        assert_eq!(config.viewport_margin, 4.0);
        assert_eq!(config.min_touch_scale, 0.25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_negative_and_non_finite_lengths() {
        let err = PlacementConfig::default().cursor_gap(-1.0).validate();
        assert!(matches!(
            err,
            Err(ConfigError::NegativeLength {
                field: "cursor_gap",
                ..
            })
        ));

        let err = PlacementConfig::default()
            .viewport_margin(f64::NAN)
            .validate();
        assert!(matches!(
            err,
            Err(ConfigError::NegativeLength {
                field: "viewport_margin",
                ..
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_ratios() {
        assert!(matches!(
            PlacementConfig::default().max_height_fraction(0.0).validate(),
            Err(ConfigError::OutOfRange {
                field: "max_height_fraction",
                ..
            })
        ));
        assert!(matches!(
            PlacementConfig::default().max_effective_zoom(0.9).validate(),
            Err(ConfigError::OutOfRange {
                field: "max_effective_zoom",
                ..
            })
        ));
        assert!(matches!(
            PlacementConfig::default().min_touch_scale(1.5).validate(),
            Err(ConfigError::OutOfRange {
                field: "min_touch_scale",
                ..
            })
        ));
        assert!(matches!(
            PlacementConfig::default().zoomed_scale_min(0.5).validate(),
            Err(ConfigError::OutOfRange {
                field: "zoomed_scale_min",
                ..
            })
        ));
    }

    #[test]
    fn rejects_tap_threshold_above_zoomed_cap() {
        let err = PlacementConfig::default()
            .tap_max_scroll_px(20.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvertedThresholds {
                tap: 20.0,
                zoomed_max: 12.0,
            }
        );
        assert_eq!(
            err.to_string(),
            "tap dismiss threshold 20px exceeds zoomed threshold cap 12px"
        );
    }
}
