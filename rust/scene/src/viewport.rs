// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canvas zoom and pan state

use serde::{Deserialize, Serialize};

/// Smallest allowed zoom factor
pub const MIN_ZOOM: f64 = 0.5;

/// Largest allowed zoom factor
pub const MAX_ZOOM: f64 = 3.0;

/// Zoom multiplier applied per wheel notch
pub const WHEEL_ZOOM_FACTOR: f64 = 1.05;

/// Zoom factor and pan offset of the 2D canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl Viewport {
    /// Set the zoom factor, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    ///
    /// Non-finite values are ignored. Returns whether the zoom changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    /// Wheel zoom: scrolling down (`delta_y > 0`) zooms out by one notch,
    /// anything else zooms in.
    pub fn zoom_by_wheel(&mut self, delta_y: f64) -> bool {
        let zoom = if delta_y > 0.0 {
            self.zoom / WHEEL_ZOOM_FACTOR
        } else {
            self.zoom * WHEEL_ZOOM_FACTOR
        };
        self.set_zoom(zoom)
    }

    pub fn set_pan(&mut self, x: f64, y: f64) -> bool {
        let changed = x != self.pan_x || y != self.pan_y;
        self.pan_x = x;
        self.pan_y = y;
        changed
    }

    /// Convert a screen point to canvas coordinates
    pub fn screen_to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.pan_x) / self.zoom, (y - self.pan_y) / self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zoom_is_clamped() {
        let mut vp = Viewport::default();
        vp.set_zoom(10.0);
        assert_eq!(vp.zoom, MAX_ZOOM);
        vp.set_zoom(0.01);
        assert_eq!(vp.zoom, MIN_ZOOM);
        assert!(!vp.set_zoom(f64::NAN));
        assert_eq!(vp.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_wheel_zoom_steps() {
        let mut vp = Viewport::default();
        vp.zoom_by_wheel(-100.0);
        assert_relative_eq!(vp.zoom, 1.05);
        vp.zoom_by_wheel(100.0);
        assert_relative_eq!(vp.zoom, 1.0);
    }

    #[test]
    fn test_wheel_zoom_saturates() {
        let mut vp = Viewport::default();
        for _ in 0..100 {
            vp.zoom_by_wheel(1.0);
        }
        assert_eq!(vp.zoom, MIN_ZOOM);
        assert!(!vp.zoom_by_wheel(1.0));
    }

    #[test]
    fn test_screen_to_canvas() {
        let mut vp = Viewport::default();
        vp.set_zoom(2.0);
        vp.set_pan(10.0, 20.0);
        assert_eq!(vp.screen_to_canvas(30.0, 60.0), (10.0, 20.0));
    }
}
