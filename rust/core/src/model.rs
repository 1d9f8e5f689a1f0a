// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room, furniture and layout records
//!
//! Field names serialize in camelCase so a [`Layout`] round-trips through the
//! persisted `{ rooms, furniture, walls }` blob unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Rect;

/// Room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Living,
    Bedroom,
    Kitchen,
    Bathroom,
    Balcony,
    Study,
}

impl RoomType {
    pub const ALL: [RoomType; 6] = [
        RoomType::Living,
        RoomType::Bedroom,
        RoomType::Kitchen,
        RoomType::Bathroom,
        RoomType::Balcony,
        RoomType::Study,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Living => "living",
            RoomType::Bedroom => "bedroom",
            RoomType::Kitchen => "kitchen",
            RoomType::Bathroom => "bathroom",
            RoomType::Balcony => "balcony",
            RoomType::Study => "study",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// Room identifier
    RoomId
}

string_id! {
    /// Furniture identifier
    FurnitureId
}

/// A rectangular zone of the plan with a semantic category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Room {
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>, room_type: RoomType, rect: Rect) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            room_type,
            width: rect.width,
            height: rect.height,
            x: rect.x,
            y: rect.y,
            color: None,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Room fields supplied by the caller; the store assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl NewRoom {
    pub fn new(name: impl Into<String>, room_type: RoomType, rect: Rect) -> Self {
        Self {
            name: name.into(),
            room_type,
            width: rect.width,
            height: rect.height,
            x: rect.x,
            y: rect.y,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn into_room(self, id: RoomId) -> Room {
        Room {
            id,
            name: self.name,
            room_type: self.room_type,
            width: self.width,
            height: self.height,
            x: self.x,
            y: self.y,
            color: self.color,
        }
    }
}

/// A rectangular item placed in a room.
///
/// `room_id` is a lookup key into the owning scene, not a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Furniture {
    pub id: FurnitureId,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub room_id: RoomId,
    #[serde(default)]
    pub rotation: f64,
}

impl Furniture {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Furniture fields supplied by the caller; the store assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFurniture {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub room_id: RoomId,
    #[serde(default)]
    pub rotation: f64,
}

impl NewFurniture {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        rect: Rect,
        room_id: impl Into<RoomId>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            width: rect.width,
            height: rect.height,
            x: rect.x,
            y: rect.y,
            room_id: room_id.into(),
            rotation: 0.0,
        }
    }

    pub fn into_furniture(self, id: FurnitureId) -> Furniture {
        Furniture {
            id,
            name: self.name,
            category: self.category,
            width: self.width,
            height: self.height,
            x: self.x,
            y: self.y,
            room_id: self.room_id,
            rotation: self.rotation,
        }
    }
}

/// Persisted layout blob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub furniture: Vec<Furniture>,
    /// Reserved; never populated by this crate
    #[serde(default)]
    pub walls: Vec<serde_json::Value>,
}

impl Layout {
    pub fn new(rooms: Vec<Room>, furniture: Vec<Furniture>) -> Self {
        Self {
            rooms,
            furniture,
            walls: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_serializes_type_field() {
        let room = Room::new("r1", "Bedroom 1", RoomType::Bedroom, Rect::new(10.0, 20.0, 100.0, 80.0));
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["type"], "bedroom");
        assert_eq!(json["id"], "r1");
        assert!(json.get("color").is_none());
    }

    #[test]
    fn test_layout_blob_parses_saved_shape() {
        let json = r##"{
            "rooms": [{"id":"a","name":"Kitchen","type":"kitchen","width":80,"height":80,"x":0,"y":0,"color":"#fde68a"}],
            "furniture": [{"id":"f","name":"Table","type":"table","width":20,"height":20,"x":5,"y":5,"roomId":"a","rotation":90}],
            "walls": []
        }"##;
        let layout = Layout::from_json(json).unwrap();
        assert_eq!(layout.rooms[0].room_type, RoomType::Kitchen);
        assert_eq!(layout.rooms[0].color.as_deref(), Some("#fde68a"));
        assert_eq!(layout.furniture[0].room_id, RoomId::new("a"));
        assert_eq!(layout.furniture[0].rotation, 90.0);
        assert!(layout.walls.is_empty());
    }

    #[test]
    fn test_layout_missing_fields_default() {
        let layout = Layout::from_json("{}").unwrap();
        assert!(layout.rooms.is_empty());
        assert!(layout.furniture.is_empty());
        let json = layout.to_json().unwrap();
        assert_eq!(json, r#"{"rooms":[],"furniture":[],"walls":[]}"#);
    }

    #[test]
    fn test_unknown_room_type_rejected() {
        let json = r#"{"rooms":[{"id":"a","name":"Garage","type":"garage","width":1,"height":1,"x":0,"y":0}]}"#;
        assert!(Layout::from_json(json).is_err());
    }
}
