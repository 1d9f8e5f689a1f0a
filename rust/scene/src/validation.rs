// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference checks for layouts entering the scene

use homeplan_core::{Furniture, FurnitureId, Room, RoomId};
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};

/// Furniture whose room is missing from the layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub furniture: FurnitureId,
    pub room: RoomId,
}

/// Every furniture item whose `room_id` names no room in `rooms`
pub fn dangling_references(rooms: &[Room], furniture: &[Furniture]) -> Vec<DanglingReference> {
    let known: FxHashSet<&RoomId> = rooms.iter().map(|r| &r.id).collect();
    furniture
        .iter()
        .filter(|f| !known.contains(&f.room_id))
        .map(|f| DanglingReference {
            furniture: f.id.clone(),
            room: f.room_id.clone(),
        })
        .collect()
}

/// Reject duplicate identifiers and dangling furniture references
pub fn validate_layout(rooms: &[Room], furniture: &[Furniture]) -> Result<()> {
    let mut room_ids = FxHashSet::default();
    for room in rooms {
        if !room_ids.insert(&room.id) {
            return Err(Error::DuplicateId(room.id.to_string()));
        }
    }

    let mut furniture_ids = FxHashSet::default();
    for item in furniture {
        if !furniture_ids.insert(&item.id) {
            return Err(Error::DuplicateId(item.id.to_string()));
        }
    }

    if let Some(dangling) = dangling_references(rooms, furniture).into_iter().next() {
        return Err(Error::DanglingFurniture {
            furniture: dangling.furniture,
            room: dangling.room,
        });
    }

    Ok(())
}
