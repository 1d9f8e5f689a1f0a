// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Partial updates for rooms and furniture
//!
//! Unset fields are left untouched. Identifiers cannot be patched.

use homeplan_core::{Furniture, Room, RoomId, RoomType};

/// Partial room update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub room_type: Option<RoomType>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// `Some(None)` clears the color
    pub color: Option<Option<String>>,
}

impl RoomPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn color(mut self, color: Option<String>) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply(self, room: &mut Room) {
        if let Some(name) = self.name {
            room.name = name;
        }
        if let Some(room_type) = self.room_type {
            room.room_type = room_type;
        }
        if let Some(width) = self.width {
            room.width = width;
        }
        if let Some(height) = self.height {
            room.height = height;
        }
        if let Some(x) = self.x {
            room.x = x;
        }
        if let Some(y) = self.y {
            room.y = y;
        }
        if let Some(color) = self.color {
            room.color = color;
        }
    }
}

/// Partial furniture update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurniturePatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub room_id: Option<RoomId>,
    pub rotation: Option<f64>,
}

impl FurniturePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn room(mut self, room_id: impl Into<RoomId>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply(self, item: &mut Furniture) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(width) = self.width {
            item.width = width;
        }
        if let Some(height) = self.height {
            item.height = height;
        }
        if let Some(x) = self.x {
            item.x = x;
        }
        if let Some(y) = self.y {
            item.y = y;
        }
        if let Some(room_id) = self.room_id {
            item.room_id = room_id;
        }
        if let Some(rotation) = self.rotation {
            item.rotation = rotation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeplan_core::Rect;

    #[test]
    fn test_room_patch_only_touches_set_fields() {
        let mut room = Room::new("r", "Study", RoomType::Study, Rect::new(0.0, 0.0, 80.0, 80.0));
        room.color = Some("#fff".into());

        RoomPatch::new().position(40.0, 120.0).apply(&mut room);
        assert_eq!((room.x, room.y), (40.0, 120.0));
        assert_eq!(room.width, 80.0);
        assert_eq!(room.color.as_deref(), Some("#fff"));

        RoomPatch::new().color(None).apply(&mut room);
        assert!(room.color.is_none());
    }

    #[test]
    fn test_empty_patch() {
        assert!(RoomPatch::new().is_empty());
        assert!(!FurniturePatch::new().rotation(90.0).is_empty());
    }
}
