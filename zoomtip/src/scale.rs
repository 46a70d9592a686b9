// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::PlacementConfig;
use crate::coord::clamp;
use crate::mode::InteractionMode;

/// Render scale for a touch tooltip under pinch-zoom.
///
/// Pinch-zoom magnifies the tooltip along with the page. Up to
/// [`PlacementConfig::max_effective_zoom`] that is left alone; beyond it the
/// tooltip is drawn at `max_effective_zoom / visual_scale` so its apparent
/// size stops growing, never below [`PlacementConfig::min_touch_scale`].
///
/// Pointer sessions always get `1.0`, as does any configuration that would
/// yield a scale that is not strictly positive and finite.
#[must_use]
pub fn touch_scale(mode: InteractionMode, visual_scale: f64, config: &PlacementConfig) -> f64 {
    if !mode.is_touch() || !visual_scale.is_finite() || visual_scale <= config.max_effective_zoom
    {
        return 1.0;
    }
    let scale = clamp(
        config.max_effective_zoom / visual_scale,
        config.min_touch_scale,
        1.0,
    );
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::touch_scale;
    use crate::{InteractionMode, PlacementConfig};

    #[test]
    fn neutral_without_zoom_or_touch() {
        let config = PlacementConfig::default();
        assert_eq!(touch_scale(InteractionMode::Touch, 1.0, &config), 1.0);
        assert_eq!(touch_scale(InteractionMode::Touch, 1.2, &config), 1.0);
        assert_eq!(touch_scale(InteractionMode::Pointer, 3.0, &config), 1.0);
    }

    #[test]
    fn shrinks_with_zoom_down_to_floor() {
        let config = PlacementConfig::default();
        let at_2 = touch_scale(InteractionMode::Touch, 2.0, &config);
        assert!((at_2 - 0.6).abs() < 1e-12);
        assert_eq!(touch_scale(InteractionMode::Touch, 3.0, &config), 0.5);
        assert_eq!(touch_scale(InteractionMode::Touch, 10.0, &config), 0.5);
    }

    #[test]
    fn monotonic_above_ceiling() {
        let config = PlacementConfig::default();
        let mut last = 1.0;
        for step in 0..40 {
            let zoom = 1.2 + f64::from(step) * 0.1;
            let scale = touch_scale(InteractionMode::Touch, zoom, &config);
            assert!(scale <= last);
            assert!(scale >= config.min_touch_scale);
            last = scale;
        }
    }

    #[test]
    fn zero_ceiling_and_floor_fall_back_to_unit_scale() {
        let config = PlacementConfig::default()
            .max_effective_zoom(0.0)
            .min_touch_scale(0.0);
        assert_eq!(touch_scale(InteractionMode::Touch, 2.0, &config), 1.0);

        let config = PlacementConfig::default()
            .max_effective_zoom(f64::NAN)
            .min_touch_scale(0.0);
        assert_eq!(touch_scale(InteractionMode::Touch, 2.0, &config), 1.0);
    }
}
