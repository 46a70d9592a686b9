// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport metrics: the host seam and the per-event snapshot.

use kurbo::{Rect, Size, Vec2};

use crate::coord::finite_or_zero;
use crate::mode::InteractionMode;

/// Raw pinch-zoom viewport state as reported by the host.
///
/// Values are untrusted; [`ViewportMetrics::from_parts`] sanitizes them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualViewport {
    /// Visible (zoomed) viewport size in CSS pixels.
    pub size: Size,
    /// Pan offset of the visual viewport within the layout viewport.
    pub offset: Vec2,
    /// Pinch-zoom factor, `1.0` when not zoomed.
    pub scale: f64,
}

impl VisualViewport {
    /// A visual viewport covering `size` with no pan and no zoom.
    #[must_use]
    pub fn unzoomed(size: Size) -> Self {
        Self {
            size,
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Source of live viewport state.
///
/// Browsers implement this over `window` and `window.visualViewport`; tests
/// and headless hosts use [`StaticViewport`].
pub trait ViewportSource {
    /// Size of the layout viewport (`innerWidth` × `innerHeight`).
    fn layout_size(&self) -> Size;

    /// Pinch-zoom viewport state, or `None` when the host has no such API.
    fn visual_viewport(&self) -> Option<VisualViewport>;
}

impl<S: ViewportSource + ?Sized> ViewportSource for &S {
    fn layout_size(&self) -> Size {
        (**self).layout_size()
    }

    fn visual_viewport(&self) -> Option<VisualViewport> {
        (**self).visual_viewport()
    }
}

/// Fixed viewport values, for tests and non-browser hosts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticViewport {
    /// Layout viewport size.
    pub layout: Size,
    /// Optional visual viewport.
    pub visual: Option<VisualViewport>,
}

impl StaticViewport {
    /// A host without pinch-zoom support.
    #[must_use]
    pub fn new(layout: Size) -> Self {
        Self {
            layout,
            visual: None,
        }
    }

    /// Adds a visual viewport.
    #[must_use]
    pub fn with_visual(mut self, visual: VisualViewport) -> Self {
        self.visual = Some(visual);
        self
    }
}

impl ViewportSource for StaticViewport {
    fn layout_size(&self) -> Size {
        self.layout
    }

    fn visual_viewport(&self) -> Option<VisualViewport> {
        self.visual
    }
}

/// The currently visible viewport, accounting for pinch-zoom.
///
/// Always finite: width and height are non-negative, offsets are finite and
/// scale is strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    size: Size,
    offset: Vec2,
    scale: f64,
}

impl ViewportMetrics {
    /// Metrics for an unzoomed viewport of `size` at the origin.
    #[must_use]
    pub fn unzoomed(size: Size) -> Self {
        Self {
            size: sanitize_size(size, Size::ZERO),
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Reads metrics from a source.
    ///
    /// Uses the visual viewport when the source has one and falls back to the
    /// layout viewport with zero offset and unit scale otherwise.
    #[must_use]
    pub fn from_source<S: ViewportSource + ?Sized>(source: &S) -> Self {
        Self::from_parts(source.layout_size(), source.visual_viewport())
    }

    /// Builds metrics from already-read host values.
    ///
    /// Invalid visual dimensions fall back to the layout dimension, invalid
    /// offsets to zero and an invalid or non-positive scale to `1.0`.
    #[must_use]
    pub fn from_parts(layout: Size, visual: Option<VisualViewport>) -> Self {
        let layout = sanitize_size(layout, Size::ZERO);
        let Some(visual) = visual else {
            return Self::unzoomed(layout);
        };
        Self {
            size: sanitize_size(visual.size, layout),
            offset: Vec2::new(
                finite_or_zero(visual.offset.x),
                finite_or_zero(visual.offset.y),
            ),
            scale: sanitize_scale(visual.scale),
        }
    }

    /// Visible width in CSS pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Visible height in CSS pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Visible size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Pan offset of the visible region within the layout viewport.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Pinch-zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The visible region in layout coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.offset.to_point(), self.size)
    }

    /// Returns `true` when no tooltip can be bounded inside this viewport.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }
}

fn sanitize_size(size: Size, fallback: Size) -> Size {
    let dim = |v: f64, fallback: f64| {
        if v.is_finite() && v >= 0.0 {
            v
        } else {
            fallback
        }
    };
    Size::new(dim(size.width, fallback.width), dim(size.height, fallback.height))
}

fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// Viewport state captured once at the start of an event handler.
///
/// Pinch-zoom state can change between reads, so every decision for one event
/// is computed from a single snapshot instead of querying the host repeatedly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSnapshot {
    layout: Size,
    visual: ViewportMetrics,
}

impl ViewportSnapshot {
    /// Samples the layout and visual viewport from `source` in one go.
    #[must_use]
    pub fn sample<S: ViewportSource + ?Sized>(source: &S) -> Self {
        let layout = source.layout_size();
        let visual = source.visual_viewport();
        Self::from_parts(layout, visual)
    }

    /// Builds a snapshot from already-read host values.
    #[must_use]
    pub fn from_parts(layout: Size, visual: Option<VisualViewport>) -> Self {
        Self {
            layout: sanitize_size(layout, Size::ZERO),
            visual: ViewportMetrics::from_parts(layout, visual),
        }
    }

    /// Sanitized layout viewport size.
    #[must_use]
    pub fn layout_size(&self) -> Size {
        self.layout
    }

    /// Visual (possibly zoomed and panned) viewport metrics.
    #[must_use]
    pub fn visual(&self) -> ViewportMetrics {
        self.visual
    }

    /// Current pinch-zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.visual.scale
    }

    /// Metrics an interaction mode positions against.
    ///
    /// Pointer sessions use the full layout viewport with no pan offset; touch
    /// sessions use the visual viewport.
    #[must_use]
    pub fn bounds(&self, mode: InteractionMode) -> ViewportMetrics {
        match mode {
            InteractionMode::Pointer => ViewportMetrics {
                size: self.layout,
                offset: Vec2::ZERO,
                scale: self.visual.scale,
            },
            InteractionMode::Touch => self.visual,
        }
    }
}
