// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry primitives for the 2D plan
//!
//! Rooms and furniture are axis-aligned rectangles in canvas pixels. The
//! canvas grid is [`GRID_SIZE`] pixels per cell, and one cell maps to one
//! world unit in the 3D view.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Canvas grid cell size in pixels
pub const GRID_SIZE: f64 = 40.0;

/// Canvas pixels per world unit in the 3D view
pub const PIXELS_PER_WORLD_UNIT: f64 = 40.0;

/// Round to the nearest integer, with halves rounded toward positive infinity.
///
/// `f64::round` sends -2.5 to -3; plan coordinates and scores use the
/// half-up convention instead, so -2.5 becomes -2.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Quantize a coordinate to the nearest multiple of `grid_size`
#[inline]
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return value;
    }
    round_half_up(value / grid_size) * grid_size
}

/// Quantize a coordinate to the canvas grid
#[inline]
pub fn snap(value: f64) -> f64 {
    snap_to_grid(value, GRID_SIZE)
}

/// Quantize both coordinates of a point to the canvas grid
#[inline]
pub fn snap_point(x: f64, y: f64) -> (f64, f64) {
    (snap(x), snap(y))
}

/// Convert a canvas length in pixels to world units
#[inline]
pub fn to_world(pixels: f64) -> f64 {
    pixels / PIXELS_PER_WORLD_UNIT
}

/// Axis-aligned rectangle in canvas pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    #[inline]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Center converted to world units (x → world X, y → world Z)
    #[inline]
    pub fn world_center(&self) -> Point2<f64> {
        let c = self.center();
        Point2::new(to_world(c.x), to_world(c.y))
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Same rectangle with its origin moved onto the grid
    pub fn snapped(&self, grid_size: f64) -> Rect {
        Rect {
            x: snap_to_grid(self.x, grid_size),
            y: snap_to_grid(self.y, grid_size),
            ..*self
        }
    }
}

/// Index pairs `(i, j)` with `i < j` of intersecting rectangles
pub fn overlapping_pairs(rects: &[Rect]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects[i].intersects(&rects[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_snap_rounds_to_nearest_cell() {
        assert_eq!(snap(0.0), 0.0);
        assert_eq!(snap(19.9), 0.0);
        assert_eq!(snap(20.0), 40.0);
        assert_eq!(snap(61.0), 80.0);
        assert_eq!(snap(-61.0), -80.0);
        // Halves round up, like the canvas
        assert_eq!(snap(-20.0), 0.0);
    }

    #[test]
    fn test_snap_is_idempotent_and_on_grid() {
        let samples = [-1234.5, -40.0, -0.1, 0.0, 3.3, 19.999, 20.0, 87.0, 1e6 + 0.3];
        for x in samples {
            let s = snap(x);
            assert_eq!(snap(s), s, "snap not idempotent for {x}");
            assert_eq!(s % GRID_SIZE, 0.0, "snap({x}) = {s} is off-grid");
        }
    }

    #[test]
    fn test_snap_to_grid_ignores_degenerate_grid() {
        assert_eq!(snap_to_grid(13.0, 0.0), 13.0);
        assert_eq!(snap_to_grid(13.0, -5.0), 13.0);
        assert_eq!(snap_to_grid(13.0, 20.0), 20.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(74.4), 74.0);
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let touching = Rect::new(100.0, 0.0, 50.0, 50.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&touching));
    }

    #[test]
    fn test_world_center() {
        let r = Rect::new(40.0, 80.0, 80.0, 40.0);
        let c = r.world_center();
        assert_relative_eq!(c.x, 2.0);
        assert_relative_eq!(c.y, 2.5);
    }

    #[test]
    fn test_overlapping_pairs() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 10.0, 10.0),
            Rect::new(100.0, 100.0, 10.0, 10.0),
        ];
        assert_eq!(overlapping_pairs(&rects), vec![(0, 1)]);
    }
}
