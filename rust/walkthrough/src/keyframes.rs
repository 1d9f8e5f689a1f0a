// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Camera path generation from the room list
//!
//! The path opens with an overview from the origin, visits every room in list
//! order with three shots (entry from the diagonal, a pan from the side, a pan
//! from the front) and closes by pulling back to the center. An empty plan
//! gets a single establishing shot.
//!
//! World coordinates: plan x maps to world X, plan y to world Z, and Y is up.

use homeplan_core::Room;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Camera eye height above the floor
pub const EYE_HEIGHT: f64 = 1.7;

/// Height of the look-at point
pub const TARGET_HEIGHT: f64 = 1.5;

const OVERVIEW_DURATION: f64 = 2.0;
const ENTRY_BASE_DURATION: f64 = 2.0;
const ENTRY_DURATION_STEP: f64 = 0.5;
const PAN_DURATION: f64 = 1.5;
const RETURN_DURATION: f64 = 3.0;
const EMPTY_DURATION: f64 = 3.0;

/// Diagonal offset of the entry shot from the room center
const ENTRY_OFFSET: f64 = 1.5;

/// Offset of both pan shots from the room center
const PAN_OFFSET: f64 = 1.0;

/// Camera waypoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
    /// Seconds to travel from the previous keyframe to this one
    pub duration: f64,
}

impl Keyframe {
    pub fn new(position: Point3<f64>, target: Point3<f64>, duration: f64) -> Self {
        Self {
            position,
            target,
            duration,
        }
    }
}

fn eye(x: f64, z: f64) -> Point3<f64> {
    Point3::new(x, EYE_HEIGHT, z)
}

fn look(x: f64, z: f64) -> Point3<f64> {
    Point3::new(x, TARGET_HEIGHT, z)
}

/// Build the walkthrough path for `rooms`.
///
/// Returns one keyframe for an empty plan and `2 + 3 * rooms.len()` otherwise.
pub fn generate_keyframes(rooms: &[Room]) -> Vec<Keyframe> {
    if rooms.is_empty() {
        return vec![Keyframe::new(Point3::new(5.0, EYE_HEIGHT, 8.0), look(0.0, 0.0), EMPTY_DURATION)];
    }

    let mut keyframes = Vec::with_capacity(2 + 3 * rooms.len());
    keyframes.push(Keyframe::new(eye(0.0, 0.0), look(0.0, 0.0), OVERVIEW_DURATION));

    for (index, room) in rooms.iter().enumerate() {
        let center = room.rect().world_center();
        let (cx, cz) = (center.x, center.y);
        let target = look(cx, cz);

        keyframes.push(Keyframe::new(
            eye(cx - ENTRY_OFFSET, cz - ENTRY_OFFSET),
            target,
            ENTRY_BASE_DURATION + ENTRY_DURATION_STEP * index as f64,
        ));
        keyframes.push(Keyframe::new(eye(cx + PAN_OFFSET, cz), target, PAN_DURATION));
        keyframes.push(Keyframe::new(eye(cx, cz + PAN_OFFSET), target, PAN_DURATION));
    }

    keyframes.push(Keyframe::new(eye(0.0, 5.0), look(0.0, 0.0), RETURN_DURATION));

    tracing::debug!(
        rooms = rooms.len(),
        keyframes = keyframes.len(),
        duration = total_duration(&keyframes),
        "Generated walkthrough path"
    );
    keyframes
}

/// Sum of all keyframe durations, in seconds at 1x speed
pub fn total_duration(keyframes: &[Keyframe]) -> f64 {
    keyframes.iter().map(|k| k.duration).sum()
}
