//! Window and viewport sizing structs.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};

/// Window placement and size. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xywh {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Xywh {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Clamp an origin so that at least `margin` units of the window stay
    /// inside the viewport on both axes.
    #[must_use]
    pub fn clamped_origin(viewport: Viewport, margin: i32, x: i32, y: i32) -> (i32, i32) {
        let x = x.clamp(0, (viewport.width - margin).max(0));
        let y = y.clamp(0, (viewport.height - margin).max(0));
        (x, y)
    }
}

/// Live viewport dimensions. Consulted at window-open time and while a
/// gesture is clamping geometry, never to reflow already-open windows.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether the viewport is below the given width threshold and should
    /// get the compact window layout.
    #[must_use]
    pub const fn is_narrow(&self, threshold: i32) -> bool {
        self.width < threshold
    }
}
