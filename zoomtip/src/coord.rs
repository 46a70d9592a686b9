// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar helpers shared by every placement step.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor` and `round`

/// Restricts `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: an inverted range (`min > max`)
/// or a NaN bound yields `min`, and a NaN `value` yields `min` as well.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if min.is_nan() || max.is_nan() || min > max || value.is_nan() {
        return min;
    }
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Chooses between a natural and a flipped coordinate for one axis.
///
/// Returns `preferred` when it lies in `[min, max]`, otherwise `alternate`
/// when that does, otherwise `preferred` clamped into the range. The natural
/// side is never abandoned while it still fits.
#[must_use]
pub fn pick_coordinate(preferred: f64, alternate: f64, min: f64, max: f64) -> f64 {
    if fits(preferred, min, max) {
        preferred
    } else if fits(alternate, min, max) {
        alternate
    } else {
        clamp(preferred, min, max)
    }
}

fn fits(value: f64, min: f64, max: f64) -> bool {
    min <= value && value <= max
}

/// Replaces NaN and infinities with `0.0`.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Rounds a pixel budget down to a whole pixel.
pub(crate) fn floor_px(value: f64) -> f64 {
    value.floor()
}

/// Rounds to the nearest whole pixel, halves away from zero.
pub(crate) fn round_px(value: f64) -> f64 {
    value.round()
}

#[cfg(test)]
mod tests {
    use super::{clamp, finite_or_zero, pick_coordinate};

    #[test]
    fn clamp_restricts_to_range() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_with_inverted_or_nan_range_returns_min() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
        assert_eq!(clamp(5.0, 1.0, f64::NAN), 1.0);
        assert_eq!(clamp(f64::NAN, 2.0, 8.0), 2.0);
    }

    #[test]
    fn pick_keeps_preferred_when_it_fits() {
        // Alternate also fits, but the natural side wins.
        assert_eq!(pick_coordinate(50.0, 10.0, 0.0, 100.0), 50.0);
        // Exactly on the bound still counts as fitting.
        assert_eq!(pick_coordinate(100.0, 10.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn pick_flips_only_when_preferred_overflows() {
        assert_eq!(pick_coordinate(120.0, 30.0, 0.0, 100.0), 30.0);
        assert_eq!(pick_coordinate(-5.0, 40.0, 0.0, 100.0), 40.0);
    }

    #[test]
    fn pick_clamps_preferred_when_neither_fits() {
        assert_eq!(pick_coordinate(120.0, -20.0, 0.0, 100.0), 100.0);
        assert_eq!(pick_coordinate(-10.0, 150.0, 0.0, 100.0), 0.0);
        // Box larger than the viewport: the range is inverted, pin to `min`.
        assert_eq!(pick_coordinate(30.0, -200.0, 0.0, -50.0), 0.0);
    }

    #[test]
    fn finite_or_zero_scrubs_non_finite() {
        assert_eq!(finite_or_zero(3.5), 3.5);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
    }
}
