// Copyright 2025 the Zoomtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the user is interacting with the tooltip's host surface.
///
/// Every operation in this crate takes the mode explicitly. Pointer sessions
/// position against the layout viewport; touch sessions track the pinch-zoom
/// visual viewport and adapt size and dismissal to the zoom level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
    /// Mouse or pen hover. Pinch-zoom panning is assumed not to coexist with it.
    #[default]
    Pointer,
    /// Touch taps on a touch-capable device, possibly pinch-zoomed.
    Touch,
}

impl InteractionMode {
    /// Returns `true` for [`InteractionMode::Touch`].
    #[must_use]
    pub fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }
}
