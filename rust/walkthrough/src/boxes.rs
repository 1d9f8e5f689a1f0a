// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extruded room boxes for the 3D view

use homeplan_core::{to_world, Room, RoomId};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Wall height of every room box, in world units
pub const ROOM_HEIGHT: f64 = 3.0;

/// Fill used when a room has no color of its own
pub const DEFAULT_ROOM_COLOR: &str = "#e0e7ff";

/// Fill of the selected room
pub const SELECTED_ROOM_COLOR: &str = "#4f46e5";

/// One room extruded to [`ROOM_HEIGHT`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomBox {
    /// `None` for placeholder boxes
    pub room: Option<RoomId>,
    pub center: Point3<f64>,
    pub size: Vector3<f64>,
    pub color: String,
}

impl RoomBox {
    /// Box for `room`, centered on the room's world center rather than its top-left corner.
    pub fn from_room(room: &Room, selected: bool) -> Self {
        let center = room.rect().world_center();
        let color = if selected {
            SELECTED_ROOM_COLOR.to_string()
        } else {
            room.color.clone().unwrap_or_else(|| DEFAULT_ROOM_COLOR.to_string())
        };
        Self {
            room: Some(room.id.clone()),
            center: Point3::new(center.x, ROOM_HEIGHT / 2.0, center.y),
            size: Vector3::new(to_world(room.width), ROOM_HEIGHT, to_world(room.height)),
            color,
        }
    }

    fn placeholder(center: [f64; 2], size: [f64; 2], color: &str) -> Self {
        Self {
            room: None,
            center: Point3::new(center[0], ROOM_HEIGHT / 2.0, center[1]),
            size: Vector3::new(size[0], ROOM_HEIGHT, size[1]),
            color: color.to_string(),
        }
    }
}

/// Boxes for every room, or three placeholder boxes for an empty plan
pub fn room_boxes(rooms: &[Room], selected: Option<&RoomId>) -> Vec<RoomBox> {
    if rooms.is_empty() {
        return vec![
            RoomBox::placeholder([2.0, 2.0], [4.0, 3.0], "#c7d2fe"),
            RoomBox::placeholder([6.0, 2.0], [3.0, 3.0], "#dbeafe"),
            RoomBox::placeholder([2.0, 6.0], [3.0, 4.0], "#f3e8ff"),
        ];
    }
    rooms
        .iter()
        .map(|room| RoomBox::from_room(room, selected == Some(&room.id)))
        .collect()
}
