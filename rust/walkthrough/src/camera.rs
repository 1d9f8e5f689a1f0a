// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Virtual camera state consumed by the 3D view

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Orbit radius around the origin
pub const ORBIT_RADIUS: f64 = 8.0;

/// Orbit angular speed in radians per millisecond
pub const ORBIT_RATE: f64 = 0.0005;

/// Linear interpolation between two points
#[inline]
pub fn lerp(from: &Point3<f64>, to: &Point3<f64>, t: f64) -> Point3<f64> {
    from + (to - from) * t
}

/// Camera position and look-at point in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub position: Point3<f64>,
    pub look_at: Point3<f64>,
}

impl Default for Camera {
    /// Overview pose used when the 3D view opens
    fn default() -> Self {
        Self {
            position: Point3::new(5.0, 5.0, 8.0),
            look_at: Point3::origin(),
        }
    }
}

impl Camera {
    pub fn new(position: Point3<f64>, look_at: Point3<f64>) -> Self {
        Self { position, look_at }
    }

    /// Move a fraction `factor` of the way toward `target`
    #[inline]
    pub fn approach(&mut self, target: &Point3<f64>, factor: f64) {
        self.position = lerp(&self.position, target, factor);
    }

    /// Auto-rotate pose: circles the origin at [`ORBIT_RADIUS`], keeping the
    /// current height, looking at a point 1 unit above the origin.
    pub fn orbit(&mut self, elapsed_ms: f64) {
        let angle = elapsed_ms * ORBIT_RATE;
        self.position.x = angle.cos() * ORBIT_RADIUS;
        self.position.z = angle.sin() * ORBIT_RADIUS;
        self.look_at = Point3::new(0.0, 1.0, 0.0);
    }
}
