// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomtip: viewport-aware tooltip placement with pinch-zoom adaptation.
//!
//! This crate computes where a dashboard tooltip goes, how large it may be,
//! whether it wraps or scrolls, and whether a touch tooltip should survive an
//! ambiguous viewport event. It focuses on:
//! - Sampling viewport state once per event ([`ViewportSnapshot`]) behind an
//!   injectable [`ViewportSource`].
//! - Anchor-relative placement for pointer and touch sessions ([`place`]).
//! - Touch size budgets and wrap/nowrap selection under pinch-zoom
//!   ([`touch_layout`], [`touch_scale`]).
//! - Telling pinch-zoom jitter apart from a real scroll-away
//!   ([`should_preserve_on_passive_event`], [`DismissTracker`]).
//!
//! It does **not** touch the DOM. Callers are expected to:
//! - Wire pointer/touch/scroll events and pass in anchor points and gesture flags.
//! - Measure the tooltip element and apply the returned [`TooltipStyle`].
//!
//! `zoomtip_web` provides those host reads and writes for browsers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use zoomtip::{
//!     InteractionMode, StaticViewport, StyleValue, TooltipPlacer, ViewportSnapshot,
//!     VisualViewport,
//! };
//!
//! // A phone pinch-zoomed to 2x and panned to (20, 10).
//! let host = StaticViewport::new(Size::new(1200.0, 800.0)).with_visual(VisualViewport {
//!     size: Size::new(200.0, 260.0),
//!     offset: Vec2::new(20.0, 10.0),
//!     scale: 2.0,
//! });
//! let snapshot = ViewportSnapshot::sample(&host);
//! let placer = TooltipPlacer::default();
//!
//! // Stage with the natural content width, then measure and position.
//! let staging = placer.prepare(&snapshot, 250.0, InteractionMode::Touch);
//! assert_eq!(staging.max_width, Some(StyleValue::Px(293.0)));
//! assert!(staging.nowrap);
//!
//! let style = placer.position(
//!     &snapshot,
//!     Point::new(60.0, 120.0),
//!     Size::new(150.0, 60.0),
//!     250.0,
//!     InteractionMode::Touch,
//! );
//! assert_eq!(style.top, Some(StyleValue::Px(10.0 + 120.0 - 12.0 - 60.0)));
//! ```
//!
//! ## Design notes
//!
//! - Every operation is a pure function of its inputs; the interaction mode is
//!   an explicit [`InteractionMode`] argument, never ambient state.
//! - Untrusted host numbers are sanitized up front; no operation panics or
//!   yields NaN or negative pixel styles.
//! - Pointer tooltips stay attached to the cursor and flip to its other side
//!   at the layout viewport's far edges; touch tooltips are bounded by the
//!   visual viewport and prefer sitting above the finger.
//!
//! Enable the `tracing` feature to emit `tracing` events for placement,
//! wrap-mode and dismiss decisions.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod config;
mod coord;
mod dismiss;
mod layout;
mod metrics;
mod mode;
mod place;
mod placer;
mod scale;
mod style;

pub use config::{ConfigError, PlacementConfig};
pub use coord::{clamp, pick_coordinate};
pub use dismiss::{
    DismissReason, DismissTracker, DismissVerdict, KeepReason, is_viewport_zoomed,
    scroll_dismiss_threshold, should_preserve_on_passive_event,
};
pub use layout::{Overflow, TouchLayout, touch_layout};
pub use metrics::{
    StaticViewport, ViewportMetrics, ViewportSnapshot, ViewportSource, VisualViewport,
};
pub use mode::InteractionMode;
pub use place::{Placement, place};
pub use placer::TooltipPlacer;
pub use scale::touch_scale;
pub use style::{NOWRAP_CLASS, StyleValue, TooltipStyle};
