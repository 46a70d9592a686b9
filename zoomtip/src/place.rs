// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor-relative tooltip positioning.

use kurbo::{Point, Size};

use crate::config::PlacementConfig;
use crate::coord::{finite_or_zero, pick_coordinate};
use crate::metrics::{ViewportMetrics, ViewportSnapshot};
use crate::mode::InteractionMode;

/// Final screen offset of the tooltip's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// CSS `left`, in layout-viewport pixels.
    pub left: f64,
    /// CSS `top`, in layout-viewport pixels.
    pub top: f64,
    /// Always `false`: placement sets an explicit top and styles always leave
    /// `bottom` at `auto`. Kept so hosts that record bottom-anchored tooltips
    /// in their own state can store a `Placement` unchanged.
    pub uses_bottom_anchor: bool,
}

impl Placement {
    fn top_left(left: f64, top: f64) -> Self {
        Self {
            left,
            top,
            uses_bottom_anchor: false,
        }
    }

    /// The placed corner as a point.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Positions a tooltip of size `tooltip` next to `anchor`.
///
/// - Pointer: each axis goes through [`pick_coordinate`] against the layout
///   viewport, preferring `anchor + gap` and flipping to the other side of the
///   cursor when the tooltip's corner would leave the viewport. The preferred
///   side is kept as long as the corner stays on-screen, so the tooltip stays
///   visually attached to the cursor.
/// - Touch: the anchor is translated by the visual viewport's pan offset and
///   each axis goes through [`pick_coordinate`] against the visible region.
///   Horizontally the tooltip prefers the right of the finger, vertically it
///   prefers above it so the finger does not cover it.
///
/// A viewport without area anchors the tooltip directly at the point.
/// No coordinate is ever negative or NaN.
#[must_use]
pub fn place(
    snapshot: &ViewportSnapshot,
    anchor: Point,
    tooltip: Size,
    mode: InteractionMode,
    config: &PlacementConfig,
) -> Placement {
    let anchor = Point::new(finite_or_zero(anchor.x), finite_or_zero(anchor.y));
    let tooltip = Size::new(
        finite_or_zero(tooltip.width).max(0.0),
        finite_or_zero(tooltip.height).max(0.0),
    );
    let bounds = snapshot.bounds(mode);
    let placement = match mode {
        InteractionMode::Pointer => place_pointer(&bounds, anchor, tooltip, config.cursor_gap),
        InteractionMode::Touch => place_touch(&bounds, anchor, tooltip, config.cursor_gap),
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        ?mode,
        anchor_x = anchor.x,
        anchor_y = anchor.y,
        left = placement.left,
        top = placement.top,
        "placed tooltip"
    );

    placement
}

fn place_pointer(bounds: &ViewportMetrics, anchor: Point, tooltip: Size, gap: f64) -> Placement {
    if bounds.is_degenerate() {
        return Placement::top_left(anchor.x.max(0.0), anchor.y.max(0.0));
    }

    // The corner stays inside the layout viewport; the box itself may overhang.
    let left = pick_coordinate(
        anchor.x + gap,
        anchor.x - gap - tooltip.width,
        0.0,
        bounds.width(),
    );
    let top = pick_coordinate(
        anchor.y + gap,
        anchor.y - gap - tooltip.height,
        0.0,
        bounds.height(),
    );
    Placement::top_left(left.max(0.0), top.max(0.0))
}

fn place_touch(bounds: &ViewportMetrics, anchor: Point, tooltip: Size, gap: f64) -> Placement {
    let offset = bounds.offset();
    let x = offset.x + anchor.x;
    let y = offset.y + anchor.y;
    if bounds.is_degenerate() {
        return Placement::top_left(x.max(0.0), y.max(0.0));
    }

    let min_x = offset.x;
    let max_x = offset.x + bounds.width() - tooltip.width;
    let min_y = offset.y;
    let max_y = offset.y + bounds.height() - tooltip.height;

    let left = pick_coordinate(x + gap, x - gap - tooltip.width, min_x, max_x);
    let top = pick_coordinate(y - gap - tooltip.height, y + gap, min_y, max_y);
    Placement::top_left(left.max(0.0), top.max(0.0))
}
