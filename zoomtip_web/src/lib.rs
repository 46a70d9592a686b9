// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser adapter for `zoomtip`.
//!
//! All DOM reads and writes of the tooltip pipeline live here; the core crate
//! stays a pure geometry layer. On `wasm32` this crate provides:
//! - `WindowViewport`, a [`zoomtip::ViewportSource`] over `window.innerWidth`,
//!   `window.innerHeight` and `window.visualViewport`.
//! - `measure_box` / `content_width` to measure a tooltip element.
//! - `apply_style` to write a [`TooltipStyle`] to the element's inline style
//!   and toggle the [`zoomtip::NOWRAP_CLASS`] class.
//! - `scroll_position` to feed a [`zoomtip::DismissTracker`].
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn open(
//!     window: web_sys::Window,
//!     tooltip: &web_sys::HtmlElement,
//!     anchor: kurbo::Point,
//!     mode: zoomtip::InteractionMode,
//! ) -> Result<(), wasm_bindgen::JsValue> {
//!     use zoomtip::{TooltipPlacer, ViewportSnapshot};
//!     use zoomtip_web::{WindowViewport, apply_style, content_width, measure_box};
//!
//!     let snapshot = ViewportSnapshot::sample(&WindowViewport::new(window));
//!     let placer = TooltipPlacer::default();
//!     let natural = content_width(tooltip);
//!     apply_style(tooltip, &placer.prepare(&snapshot, natural, mode))?;
//!     let measured = measure_box(tooltip);
//!     apply_style(tooltip, &placer.position(&snapshot, anchor, measured, natural, mode))
//! }
//! ```
//!
//! On other targets only the DOM-independent helpers are compiled.

use kurbo::{Size, Vec2};
use zoomtip::{StyleValue, TooltipStyle, VisualViewport};

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{WindowViewport, apply_style, content_width, measure_box, scroll_position};

/// One inline-style mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleOp {
    /// `style.setProperty(name, value)`.
    Set(&'static str, String),
    /// `style.removeProperty(name)`.
    Remove(&'static str),
}

/// Translates a style record into the inline-style mutations that realize it.
pub fn style_ops(style: &TooltipStyle) -> impl Iterator<Item = StyleOp> {
    style.declarations().map(|(name, value)| match value {
        StyleValue::Remove => StyleOp::Remove(name),
        value => StyleOp::Set(name, value.to_string()),
    })
}

/// Builds a [`VisualViewport`] from the raw `window.visualViewport` fields.
///
/// Browsers report `0` sizes for detached or hidden documents; those are
/// passed through and replaced by the layout size during sanitization.
#[must_use]
pub fn visual_viewport_from_raw(
    width: f64,
    height: f64,
    offset_left: f64,
    offset_top: f64,
    scale: f64,
) -> VisualViewport {
    let size = |v: f64| if v > 0.0 { v } else { f64::NAN };
    VisualViewport {
        size: Size::new(size(width), size(height)),
        offset: Vec2::new(offset_left, offset_top),
        scale,
    }
}
