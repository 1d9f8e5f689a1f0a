// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Candidate room arrangements for a bedroom count and floor area
//!
//! Every call yields [`VARIANT_COUNT`] variants. Variant `i` uses a square base
//! footprint of `sqrt(area / (bedrooms + 2) * (0.8 + 0.1 * i))`, so later
//! variants have slightly larger rooms. Each variant holds one living room,
//! one kitchen and the bedrooms laid out two per row.
//!
//! Positions are fixed offsets; overlapping rooms are not resolved. Use
//! [`Variant::overlapping_pairs`] to inspect collisions.
//!
//! The `style` argument does not change the generated geometry.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{overlapping_pairs, Rect};
use crate::model::{Layout, Room, RoomId, RoomType};

/// Number of variants produced per request
pub const VARIANT_COUNT: usize = 3;

/// Horizontal shift applied per variant index
const VARIANT_OFFSET: f64 = 50.0;

/// One candidate full-room arrangement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub name: String,
    pub rooms: Vec<Room>,
}

impl Variant {
    /// Index pairs of rooms whose rectangles overlap
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let rects: Vec<Rect> = self.rooms.iter().map(Room::rect).collect();
        overlapping_pairs(&rects)
    }

    /// Furniture-free layout blob for persistence or loading into a scene
    pub fn into_layout(self) -> Layout {
        Layout::new(self.rooms, Vec::new())
    }
}

fn room_id(room_type: RoomType, index: u32, variant: usize) -> RoomId {
    RoomId::new(format!("{}-{}-{}", room_type.as_str(), index, variant))
}

fn build_variant(bedrooms: u32, area: f64, variant: usize) -> Variant {
    let offset = variant as f64 * VARIANT_OFFSET;
    let factor = 0.8 + 0.1 * variant as f64;
    let base = (area / (f64::from(bedrooms) + 2.0) * factor).sqrt();

    let mut rooms = Vec::with_capacity(bedrooms as usize + 2);
    rooms.push(Room::new(
        room_id(RoomType::Living, 0, variant),
        "Living Room",
        RoomType::Living,
        Rect::new(10.0 + offset, 10.0, base * 1.2, base),
    ));
    rooms.push(Room::new(
        room_id(RoomType::Kitchen, 0, variant),
        "Kitchen",
        RoomType::Kitchen,
        Rect::new(10.0 + offset, 80.0, base * 0.8, base * 0.8),
    ));

    for j in 0..bedrooms {
        let column = f64::from(j % 2);
        let row = f64::from(j / 2);
        rooms.push(Room::new(
            room_id(RoomType::Bedroom, j, variant),
            format!("Bedroom {}", j + 1),
            RoomType::Bedroom,
            Rect::new(200.0 + column * 100.0 + offset, 10.0 + row * 100.0, base, base),
        ));
    }

    Variant {
        id: format!("variant-{variant}"),
        name: format!("Layout {}", variant + 1),
        rooms,
    }
}

/// Generate the candidate arrangements.
///
/// `area` must be positive and finite. `style` is currently a no-op.
pub fn generate_variants(bedrooms: u32, area: f64, style: &str) -> Result<Vec<Variant>> {
    if !(area.is_finite() && area > 0.0) {
        return Err(Error::InvalidArea(area));
    }
    if !style.is_empty() {
        tracing::debug!(style, "Layout style does not affect generated geometry");
    }

    let variants: Vec<Variant> = (0..VARIANT_COUNT)
        .map(|i| build_variant(bedrooms, area, i))
        .collect();

    for variant in &variants {
        let overlaps = variant.overlapping_pairs().len();
        if overlaps > 0 {
            tracing::debug!(variant = %variant.id, overlaps, "Variant contains overlapping rooms");
        }
    }

    Ok(variants)
}
