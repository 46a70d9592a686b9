// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch dismiss classification.
//!
//! Pinch-zoom panning fires the same scroll/resize notifications as a user
//! scrolling content away from an open tooltip. These helpers decide which of
//! the two a passive viewport event most likely was.
//!
//! ## Usage
//!
//! 1) When a touch tooltip opens, create a [`DismissTracker`] with the current
//!    scroll position.
//! 2) On every scroll/resize/zoom event while it is open, call
//!    [`DismissTracker::evaluate`] with a fresh scroll position and scale.
//! 3) Hide the tooltip on [`DismissVerdict::Dismiss`]; drop the tracker when
//!    the tooltip closes.
//!
//! ```
//! use kurbo::Vec2;
//! use zoomtip::{DismissTracker, DismissVerdict, InteractionMode, PlacementConfig};
//!
//! let mut tracker = DismissTracker::new(Vec2::new(0.0, 400.0), PlacementConfig::default());
//!
//! // Pinch-zoom jitter at 2.4x stays under the 5px zoomed threshold.
//! let verdict = tracker.evaluate(Vec2::new(0.0, 403.0), false, 2.4, InteractionMode::Touch);
//! assert!(matches!(verdict, DismissVerdict::Keep(_)));
//!
//! // Scrolling the card itself is always intentional.
//! let verdict = tracker.evaluate(Vec2::new(0.0, 400.0), true, 2.4, InteractionMode::Touch);
//! assert!(verdict.is_dismiss());
//! ```

use kurbo::Vec2;

use crate::config::PlacementConfig;
use crate::coord::{clamp, round_px};
use crate::mode::InteractionMode;

/// Returns `true` when a touch viewport is pinch-zoomed in.
///
/// Pointer sessions never count as zoomed.
#[must_use]
pub fn is_viewport_zoomed(mode: InteractionMode, scale: f64, config: &PlacementConfig) -> bool {
    mode.is_touch() && scale >= config.zoomed_scale_min
}

/// Scroll distance, in CSS pixels, beyond which a touch tooltip is dismissed.
///
/// Not zoomed, this is [`PlacementConfig::tap_max_scroll_px`] so practically
/// any scroll dismisses. Zoomed, pinch gestures jitter the scroll position in
/// proportion to the zoom, so the threshold grows to
/// `round(tap_max_scroll_px * scale)`, capped at
/// [`PlacementConfig::zoomed_dismiss_max_scroll_px`].
#[must_use]
pub fn scroll_dismiss_threshold(
    mode: InteractionMode,
    scale: f64,
    config: &PlacementConfig,
) -> f64 {
    if !is_viewport_zoomed(mode, scale, config) {
        return config.tap_max_scroll_px;
    }
    clamp(
        round_px(config.tap_max_scroll_px * scale),
        config.tap_max_scroll_px,
        config.zoomed_dismiss_max_scroll_px,
    )
}

/// Decides whether a passive viewport event should leave a touch tooltip open.
///
/// Only a zoomed touch viewport whose event neither came from the scrollable
/// card nor moved the viewport past the threshold is preserved; the caller
/// applies its normal dismissal logic otherwise.
#[must_use]
pub fn should_preserve_on_passive_event(
    mode: InteractionMode,
    scale: f64,
    card_scroll_event: bool,
    viewport_moved: bool,
    config: &PlacementConfig,
) -> bool {
    if !mode.is_touch() || card_scroll_event || viewport_moved {
        return false;
    }
    is_viewport_zoomed(mode, scale, config)
}

/// Why a tooltip stays open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeepReason {
    /// Passive event on a zoomed viewport.
    ZoomedPassive,
    /// Unzoomed, but the scroll stayed within the tap tolerance.
    WithinTapTolerance,
}

/// Why a tooltip closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// Pointer tooltips close on any viewport scroll.
    PointerScroll,
    /// The scrollable card under the tooltip moved.
    CardScrolled,
    /// The viewport scrolled past the dismiss threshold.
    ViewportMoved,
}

/// Outcome of [`DismissTracker::evaluate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DismissVerdict {
    /// Leave the tooltip open.
    Keep(KeepReason),
    /// Hide the tooltip.
    Dismiss(DismissReason),
}

impl DismissVerdict {
    /// Returns `true` for [`DismissVerdict::Dismiss`].
    #[must_use]
    pub fn is_dismiss(self) -> bool {
        matches!(self, Self::Dismiss(_))
    }
}

/// Scroll baseline of one open tooltip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DismissTracker {
    baseline: Vec2,
    config: PlacementConfig,
}

impl DismissTracker {
    /// Starts tracking from the scroll position at the moment the tooltip opened.
    #[must_use]
    pub fn new(baseline: Vec2, config: PlacementConfig) -> Self {
        Self { baseline, config }
    }

    /// Scroll position captured when the tooltip opened.
    #[must_use]
    pub fn baseline(&self) -> Vec2 {
        self.baseline
    }

    /// Moves the baseline, for example after re-positioning the tooltip.
    pub fn rebase(&mut self, baseline: Vec2) {
        self.baseline = baseline;
    }

    /// Returns `true` when `scroll` lies farther from the baseline than the
    /// dismiss threshold for `scale`.
    #[must_use]
    pub fn viewport_moved(&self, scroll: Vec2, scale: f64, mode: InteractionMode) -> bool {
        let distance = (scroll - self.baseline).hypot();
        // NaN distances count as movement.
        distance.is_nan() || distance > scroll_dismiss_threshold(mode, scale, &self.config)
    }

    /// Classifies a scroll/resize/zoom event observed while the tooltip is open.
    #[must_use]
    pub fn evaluate(
        &self,
        scroll: Vec2,
        card_scroll_event: bool,
        scale: f64,
        mode: InteractionMode,
    ) -> DismissVerdict {
        let viewport_moved = self.viewport_moved(scroll, scale, mode);
        let verdict = if should_preserve_on_passive_event(
            mode,
            scale,
            card_scroll_event,
            viewport_moved,
            &self.config,
        ) {
            DismissVerdict::Keep(KeepReason::ZoomedPassive)
        } else if !mode.is_touch() {
            DismissVerdict::Dismiss(DismissReason::PointerScroll)
        } else if card_scroll_event {
            DismissVerdict::Dismiss(DismissReason::CardScrolled)
        } else if viewport_moved {
            DismissVerdict::Dismiss(DismissReason::ViewportMoved)
        } else {
            DismissVerdict::Keep(KeepReason::WithinTapTolerance)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ?verdict,
            ?mode,
            scale,
            card_scroll_event,
            viewport_moved,
            "tooltip dismiss check"
        );

        verdict
    }
}
