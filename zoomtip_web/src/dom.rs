// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};
use zoomtip::{NOWRAP_CLASS, TooltipStyle, ViewportSource, VisualViewport};

use crate::{StyleOp, style_ops, visual_viewport_from_raw};

/// [`ViewportSource`] backed by a browser window.
#[derive(Clone, Debug)]
pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    /// Wraps `window`.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Wraps the global `window`, if there is one.
    #[must_use]
    pub fn global() -> Option<Self> {
        web_sys::window().map(Self::new)
    }
}

fn js_number(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

impl ViewportSource for WindowViewport {
    fn layout_size(&self) -> Size {
        Size::new(
            js_number(self.window.inner_width()),
            js_number(self.window.inner_height()),
        )
    }

    fn visual_viewport(&self) -> Option<VisualViewport> {
        let vv = self.window.visual_viewport()?;
        Some(visual_viewport_from_raw(
            vv.width(),
            vv.height(),
            vv.offset_left(),
            vv.offset_top(),
            vv.scale(),
        ))
    }
}

/// Rendered size of the tooltip, transforms included.
#[must_use]
pub fn measure_box(tooltip: &HtmlElement) -> Size {
    let rect = tooltip.get_bounding_client_rect();
    Size::new(rect.width(), rect.height())
}

/// Natural content width of the tooltip (`scrollWidth`).
#[must_use]
pub fn content_width(tooltip: &HtmlElement) -> f64 {
    f64::from(tooltip.scroll_width())
}

/// Current document scroll position.
///
/// # Errors
///
/// Propagates exceptions thrown by `scrollX`/`scrollY`.
pub fn scroll_position(window: &Window) -> Result<Vec2, JsValue> {
    Ok(Vec2::new(window.scroll_x()?, window.scroll_y()?))
}

/// Writes `style` to the tooltip's inline style and class list.
///
/// # Errors
///
/// Propagates the first DOM exception; properties before it stay applied.
pub fn apply_style(tooltip: &HtmlElement, style: &TooltipStyle) -> Result<(), JsValue> {
    let inline = tooltip.style();
    for op in style_ops(style) {
        match op {
            StyleOp::Set(name, value) => inline.set_property(name, &value)?,
            StyleOp::Remove(name) => {
                inline.remove_property(name)?;
            }
        }
    }
    tooltip
        .class_list()
        .toggle_with_force(NOWRAP_CLASS, style.nowrap)?;
    Ok(())
}
