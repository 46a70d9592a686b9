// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::config::PlacementConfig;
use crate::dismiss::DismissTracker;
use crate::layout::{TouchLayout, touch_layout};
use crate::metrics::ViewportSnapshot;
use crate::mode::InteractionMode;
use crate::place::{Placement, place};
use crate::style::TooltipStyle;

/// Positioning orchestrator: runs the per-event tooltip pipeline with one config.
///
/// An open sequence is:
/// 1. [`TooltipPlacer::prepare`] with the content's natural width; apply the
///    staging style.
/// 2. Measure the rendered box.
/// 3. [`TooltipPlacer::position`] with the measured box; apply the final style.
///
/// Both steps take the same [`ViewportSnapshot`], sampled once for the event.
/// The placer holds no state besides its config, so repeated calls with the
/// same inputs give the same output.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipPlacer {
    config: PlacementConfig,
}

impl TooltipPlacer {
    /// Creates a placer with `config`.
    #[must_use]
    pub fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    /// The active config.
    #[must_use]
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Touch size budget for the current viewport, `None` for pointer sessions.
    #[must_use]
    pub fn layout(
        &self,
        snapshot: &ViewportSnapshot,
        content_width: f64,
        mode: InteractionMode,
    ) -> Option<TouchLayout> {
        touch_layout(&snapshot.visual(), content_width, mode, &self.config)
    }

    /// Staging style to apply before measuring the tooltip.
    #[must_use]
    pub fn prepare(
        &self,
        snapshot: &ViewportSnapshot,
        content_width: f64,
        mode: InteractionMode,
    ) -> TooltipStyle {
        TooltipStyle::staging(self.layout(snapshot, content_width, mode).as_ref())
    }

    /// Top-left placement for a measured tooltip.
    #[must_use]
    pub fn place(
        &self,
        snapshot: &ViewportSnapshot,
        anchor: Point,
        tooltip: Size,
        mode: InteractionMode,
    ) -> Placement {
        place(snapshot, anchor, tooltip, mode, &self.config)
    }

    /// Final style for a measured tooltip.
    ///
    /// `content_width` is the natural width used in [`TooltipPlacer::prepare`];
    /// the touch budget is re-applied alongside the placement so the final
    /// style is complete on its own.
    #[must_use]
    pub fn position(
        &self,
        snapshot: &ViewportSnapshot,
        anchor: Point,
        tooltip: Size,
        content_width: f64,
        mode: InteractionMode,
    ) -> TooltipStyle {
        let placement = self.place(snapshot, anchor, tooltip, mode);
        let layout = self.layout(snapshot, content_width, mode);
        TooltipStyle::positioned(&placement, layout.as_ref())
    }

    /// Dismiss tracker for a touch tooltip opened at `scroll`.
    #[must_use]
    pub fn dismiss_tracker(&self, scroll: Vec2) -> DismissTracker {
        DismissTracker::new(scroll, self.config)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::TooltipPlacer;
    use crate::{InteractionMode, PlacementConfig, StyleValue, ViewportSnapshot, VisualViewport};

    fn snapshot() -> ViewportSnapshot {
        ViewportSnapshot::from_parts(
            Size::new(1200.0, 800.0),
            Some(VisualViewport {
                size: Size::new(700.0, 500.0),
                offset: Vec2::new(240.0, 180.0),
                scale: 1.0,
            }),
        )
    }

    #[test]
    fn position_is_idempotent() {
        let placer = TooltipPlacer::default();
        let snapshot = snapshot();
        let anchor = Point::new(100.0, 220.0);
        let tooltip = Size::new(200.0, 80.0);
        for mode in [InteractionMode::Pointer, InteractionMode::Touch] {
            let first = placer.position(&snapshot, anchor, tooltip, 200.0, mode);
            let second = placer.position(&snapshot, anchor, tooltip, 200.0, mode);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn touch_pipeline_stages_then_places() {
        let placer = TooltipPlacer::default();
        let snapshot = snapshot();
        let staging = placer.prepare(&snapshot, 200.0, InteractionMode::Touch);
        assert_eq!(staging.left, Some(StyleValue::Px(252.0)));
        assert_eq!(staging.top, Some(StyleValue::Px(192.0)));
        assert_eq!(staging.max_width, Some(StyleValue::Px(676.0)));

        let style = placer.position(
            &snapshot,
            Point::new(100.0, 220.0),
            Size::new(200.0, 80.0),
            200.0,
            InteractionMode::Touch,
        );
        assert_eq!(style.left, Some(StyleValue::Px(352.0)));
        assert_eq!(style.top, Some(StyleValue::Px(308.0)));
        assert_eq!(style.bottom, Some(StyleValue::Keyword("auto")));
        assert_eq!(style.max_width, Some(StyleValue::Px(676.0)));
    }

    #[test]
    fn dismiss_tracker_uses_placer_config() {
        let placer = TooltipPlacer::default();
        let tracker = placer.dismiss_tracker(Vec2::new(0.0, 50.0));
        assert_eq!(tracker.baseline(), Vec2::new(0.0, 50.0));
        assert!(!tracker.viewport_moved(Vec2::new(0.0, 52.0), 1.0, InteractionMode::Touch));
    }

    #[test]
    fn unvalidated_zero_scale_config_keeps_finite_budgets() {
        let config = PlacementConfig::default()
            .max_effective_zoom(0.0)
            .min_touch_scale(0.0);
        let placer = TooltipPlacer::new(config);
        let snapshot = ViewportSnapshot::from_parts(
            Size::new(1200.0, 800.0),
            Some(VisualViewport {
                size: Size::new(200.0, 200.0),
                offset: Vec2::ZERO,
                scale: 2.0,
            }),
        );
        let staging = placer.prepare(&snapshot, 100.0, InteractionMode::Touch);
        assert_eq!(staging.max_width, Some(StyleValue::Px(176.0)));
        assert_eq!(staging.max_height, Some(StyleValue::Px(140.0)));
        for (name, value) in staging.declarations() {
            if let StyleValue::Px(px) = value {
                assert!(px.is_finite(), "{name} is {px}");
            }
        }
    }
}
