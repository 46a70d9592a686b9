// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS-equivalent style record applied to the tooltip element.

use core::fmt;

use crate::layout::TouchLayout;
use crate::place::Placement;

/// Class toggled on the tooltip element in nowrap mode.
pub const NOWRAP_CLASS: &str = "nowrap";

/// Value of one style property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    /// A length in CSS pixels.
    Px(f64),
    /// A bare CSS keyword such as `auto`.
    Keyword(&'static str),
    /// A uniform `scale()` transform.
    Scale(f64),
    /// Clear any inline override of the property.
    Remove,
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Keyword(k) => f.write_str(k),
            Self::Scale(s) => write!(f, "scale({s})"),
            Self::Remove => Ok(()),
        }
    }
}

/// Inline style for the tooltip element.
///
/// `None` leaves a property as it is; [`StyleValue::Remove`] clears it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TooltipStyle {
    /// `left`.
    pub left: Option<StyleValue>,
    /// `top`.
    pub top: Option<StyleValue>,
    /// `bottom`; always `auto` once positioned, never a second vertical constraint.
    pub bottom: Option<StyleValue>,
    /// `width`, fixed only in nowrap mode.
    pub width: Option<StyleValue>,
    /// `max-width`.
    pub max_width: Option<StyleValue>,
    /// `max-height`.
    pub max_height: Option<StyleValue>,
    /// `overflow-x`.
    pub overflow_x: Option<StyleValue>,
    /// `overflow-y`.
    pub overflow_y: Option<StyleValue>,
    /// `transform`, carrying the touch render scale.
    pub transform: Option<StyleValue>,
    /// `transform-origin`.
    pub transform_origin: Option<StyleValue>,
    /// Whether [`NOWRAP_CLASS`] should be present.
    pub nowrap: bool,
}

impl TooltipStyle {
    /// Style used while the tooltip is measured.
    ///
    /// Touch sessions get their size budget and are parked at the staging
    /// origin; pointer sessions have every touch override cleared.
    #[must_use]
    pub fn staging(layout: Option<&TouchLayout>) -> Self {
        let mut style = Self::default();
        style.apply_layout(layout);
        if let Some(layout) = layout {
            style.left = Some(StyleValue::Px(layout.origin.x));
            style.top = Some(StyleValue::Px(layout.origin.y));
            style.bottom = Some(StyleValue::Keyword("auto"));
        }
        style
    }

    /// Final style for a placed tooltip.
    #[must_use]
    pub fn positioned(placement: &Placement, layout: Option<&TouchLayout>) -> Self {
        let mut style = Self::default();
        style.apply_layout(layout);
        style.left = Some(StyleValue::Px(placement.left));
        style.top = Some(StyleValue::Px(placement.top));
        style.bottom = Some(StyleValue::Keyword("auto"));
        style
    }

    fn apply_layout(&mut self, layout: Option<&TouchLayout>) {
        let Some(layout) = layout else {
            self.width = Some(StyleValue::Remove);
            self.max_width = Some(StyleValue::Remove);
            self.max_height = Some(StyleValue::Remove);
            self.overflow_x = Some(StyleValue::Remove);
            self.overflow_y = Some(StyleValue::Remove);
            self.transform = Some(StyleValue::Remove);
            self.transform_origin = Some(StyleValue::Remove);
            self.nowrap = false;
            return;
        };
        self.width = Some(layout.width.map_or(StyleValue::Remove, StyleValue::Px));
        self.max_width = Some(StyleValue::Px(layout.max_width));
        self.max_height = Some(StyleValue::Px(layout.max_height));
        self.overflow_x = Some(StyleValue::Keyword(layout.overflow_x.as_css()));
        self.overflow_y = Some(StyleValue::Keyword(layout.overflow_y.as_css()));
        if layout.scale < 1.0 {
            self.transform = Some(StyleValue::Scale(layout.scale));
            self.transform_origin = Some(StyleValue::Keyword("top left"));
        } else {
            self.transform = Some(StyleValue::Remove);
            self.transform_origin = Some(StyleValue::Remove);
        }
        self.nowrap = layout.nowrap;
    }

    /// Properties to write, as CSS property name and value, in a fixed order.
    pub fn declarations(&self) -> impl Iterator<Item = (&'static str, StyleValue)> {
        [
            ("left", self.left),
            ("top", self.top),
            ("bottom", self.bottom),
            ("width", self.width),
            ("max-width", self.max_width),
            ("max-height", self.max_height),
            ("overflow-x", self.overflow_x),
            ("overflow-y", self.overflow_y),
            ("transform", self.transform),
            ("transform-origin", self.transform_origin),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;
    use std::vec::Vec;

    use kurbo::Point;

    use super::{StyleValue, TooltipStyle};
    use crate::{Overflow, Placement, TouchLayout};

    fn layout(scale: f64, nowrap: bool) -> TouchLayout {
        TouchLayout {
            max_width: 293.0,
            max_height: 303.0,
            width: nowrap.then_some(293.0),
            overflow_x: if nowrap { Overflow::Auto } else { Overflow::Hidden },
            overflow_y: Overflow::Auto,
            nowrap,
            origin: Point::new(32.0, 22.0),
            scale,
        }
    }

    #[test]
    fn values_render_as_css() {
        assert_eq!(StyleValue::Px(112.0).to_string(), "112px");
        assert_eq!(StyleValue::Px(352.5).to_string(), "352.5px");
        assert_eq!(StyleValue::Keyword("auto").to_string(), "auto");
        assert_eq!(StyleValue::Scale(0.6).to_string(), "scale(0.6)");
        assert_eq!(StyleValue::Remove.to_string(), "");
    }

    #[test]
    fn pointer_staging_clears_touch_overrides_only() {
        let style = TooltipStyle::staging(None);
        assert_eq!(style.left, None);
        assert_eq!(style.top, None);
        assert_eq!(style.max_width, Some(StyleValue::Remove));
        assert!(!style.nowrap);
        let names: Vec<_> = style.declarations().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                "width",
                "max-width",
                "max-height",
                "overflow-x",
                "overflow-y",
                "transform",
                "transform-origin"
            ]
        );
    }

    #[test]
    fn touch_staging_parks_at_origin() {
        let style = TooltipStyle::staging(Some(&layout(1.0, false)));
        assert_eq!(style.left, Some(StyleValue::Px(32.0)));
        assert_eq!(style.top, Some(StyleValue::Px(22.0)));
        assert_eq!(style.width, Some(StyleValue::Remove));
        assert_eq!(style.overflow_x, Some(StyleValue::Keyword("hidden")));
        assert_eq!(style.transform, Some(StyleValue::Remove));
    }

    #[test]
    fn zoomed_nowrap_sets_width_and_scale() {
        let placement = Placement {
            left: 40.0,
            top: 50.0,
            uses_bottom_anchor: false,
        };
        let style = TooltipStyle::positioned(&placement, Some(&layout(0.6, true)));
        let rendered: Vec<_> = style
            .declarations()
            .map(|(name, value)| (name, value.to_string()))
            .collect();
        assert_eq!(rendered[0], ("left", "40px".to_string()));
        assert_eq!(rendered[2], ("bottom", "auto".to_string()));
        assert_eq!(rendered[3], ("width", "293px".to_string()));
        assert_eq!(rendered[6], ("overflow-x", "auto".to_string()));
        assert_eq!(rendered[8], ("transform", "scale(0.6)".to_string()));
        assert!(style.nowrap);
    }

    #[test]
    fn positioned_style_never_pins_bottom() {
        let placement = Placement {
            left: 12.0,
            top: 34.0,
            uses_bottom_anchor: true,
        };
        let style = TooltipStyle::positioned(&placement, None);
        assert_eq!(style.top, Some(StyleValue::Px(34.0)));
        assert_eq!(style.bottom, Some(StyleValue::Keyword("auto")));
    }
}
