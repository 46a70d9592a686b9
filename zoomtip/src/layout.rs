// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch size budget and wrap-mode selection.

use kurbo::Point;

use crate::config::PlacementConfig;
use crate::coord::floor_px;
use crate::metrics::ViewportMetrics;
use crate::mode::InteractionMode;
use crate::scale::touch_scale;

/// CSS `overflow-*` behavior for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Content is clipped.
    Hidden,
    /// Scrollbars appear when content overflows.
    Auto,
}

impl Overflow {
    /// CSS keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Auto => "auto",
        }
    }
}

/// Size budget and wrap strategy for a touch tooltip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchLayout {
    /// Largest unscaled width, in whole pixels.
    pub max_width: f64,
    /// Largest unscaled height, in whole pixels.
    pub max_height: f64,
    /// Fixed width when [`TouchLayout::nowrap`] is set.
    pub width: Option<f64>,
    /// Horizontal overflow: scrollable in nowrap mode, clipped otherwise.
    pub overflow_x: Overflow,
    /// Vertical overflow; always scrollable.
    pub overflow_y: Overflow,
    /// Text keeps its lines and the box scrolls horizontally instead of reflowing.
    pub nowrap: bool,
    /// Where the tooltip is parked while it is measured.
    pub origin: Point,
    /// Render scale from [`touch_scale`].
    pub scale: f64,
}

/// Computes the touch size budget for `metrics` and content of `content_width`.
///
/// The visible region minus the margin is divided by the touch render scale,
/// so the scaled box still fits on screen. Once zoomed, content wider than the
/// visible width switches to a fixed-width, horizontally scrolling box rather
/// than being re-flowed into many short lines.
///
/// Returns `None` for pointer sessions, which carry no touch overrides.
#[must_use]
pub fn touch_layout(
    metrics: &ViewportMetrics,
    content_width: f64,
    mode: InteractionMode,
    config: &PlacementConfig,
) -> Option<TouchLayout> {
    if !mode.is_touch() {
        return None;
    }
    let margin = config.viewport_margin;
    let available_width = (metrics.width() - 2.0 * margin).max(0.0);
    let available_height = (metrics.height() - 2.0 * margin)
        .min(metrics.height() * config.max_height_fraction)
        .max(0.0);

    let scale = touch_scale(mode, metrics.scale(), config);
    let max_width = floor_px(available_width / scale);
    let max_height = floor_px(available_height / scale);

    let nowrap = scale < 1.0 && content_width > available_width;
    let (width, overflow_x) = if nowrap {
        (Some(max_width), Overflow::Auto)
    } else {
        (None, Overflow::Hidden)
    };

    let offset = metrics.offset();
    let layout = TouchLayout {
        max_width,
        max_height,
        width,
        overflow_x,
        overflow_y: Overflow::Auto,
        nowrap,
        origin: Point::new(offset.x + margin, offset.y + margin),
        scale,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        max_width,
        max_height,
        nowrap,
        scale,
        content_width,
        "touch tooltip layout"
    );

    Some(layout)
}
