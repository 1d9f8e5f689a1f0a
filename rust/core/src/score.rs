// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heuristic layout quality scores
//!
//! Five independent sub-scores, each clamped to `[0, 100]`, and an unweighted
//! overall average. The heuristics are crude proxies:
//!
//! - **space efficiency**: summed room area as a share of the declared floor area
//! - **natural light**: share of rooms whose top edge lies within the first third
//!   of the declared area (used as a distance figure from the window side)
//! - **privacy**: 25 points per bedroom
//! - **circulation**: furniture items per room, 50 points per item
//! - **energy**: average room area, 50 points per 100 square units
//!
//! Integer fields are rounded half-up after the overall average is taken over
//! the unrounded sub-scores.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::round_half_up;
use crate::model::{Furniture, Layout, Room, RoomType};

/// Upper bound of every sub-score
pub const MAX_SCORE: f64 = 100.0;

/// Points per bedroom for privacy
const PRIVACY_PER_BEDROOM: f64 = 25.0;

/// Points per furniture item per room for circulation
const CIRCULATION_PER_ITEM: f64 = 50.0;

/// Immutable rounded score record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub space_efficiency: u32,
    pub natural_light: u32,
    pub privacy: u32,
    pub circulation: u32,
    pub energy: u32,
    pub overall: u32,
}

impl Score {
    /// Labelled values in report order
    pub fn labelled(&self) -> [(&'static str, u32); 6] {
        [
            ("Space Efficiency", self.space_efficiency),
            ("Natural Light", self.natural_light),
            ("Privacy", self.privacy),
            ("Circulation", self.circulation),
            ("Energy Efficiency", self.energy),
            ("Overall Score", self.overall),
        ]
    }
}

/// Clamped sub-scores before rounding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub space_efficiency: f64,
    pub natural_light: f64,
    pub privacy: f64,
    pub circulation: f64,
    pub energy: f64,
}

impl ScoreBreakdown {
    /// Unweighted mean of the five sub-scores
    pub fn overall(&self) -> f64 {
        (self.space_efficiency + self.natural_light + self.privacy + self.circulation + self.energy)
            / 5.0
    }

    pub fn rounded(&self) -> Score {
        Score {
            space_efficiency: to_score(self.space_efficiency),
            natural_light: to_score(self.natural_light),
            privacy: to_score(self.privacy),
            circulation: to_score(self.circulation),
            energy: to_score(self.energy),
            overall: to_score(self.overall()),
        }
    }
}

#[inline]
fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, MAX_SCORE)
}

#[inline]
fn to_score(value: f64) -> u32 {
    round_half_up(value) as u32
}

/// Compute the clamped, unrounded sub-scores.
///
/// Fails with [`Error::EmptyLayout`] when `rooms` is empty (every per-room
/// ratio would be 0/0) and [`Error::InvalidArea`] when `total_area` is not a
/// positive finite number.
pub fn score_breakdown(rooms: &[Room], furniture: &[Furniture], total_area: f64) -> Result<ScoreBreakdown> {
    if !(total_area.is_finite() && total_area > 0.0) {
        return Err(Error::InvalidArea(total_area));
    }
    if rooms.is_empty() {
        return Err(Error::EmptyLayout);
    }

    let room_count = rooms.len() as f64;
    let used_space: f64 = rooms.iter().map(Room::area).sum();

    let space_efficiency = clamp_score(used_space / total_area * 100.0);

    let light_threshold = total_area / 3.0;
    let lit = rooms.iter().filter(|r| r.y < light_threshold).count() as f64;
    let natural_light = clamp_score(lit / room_count * 100.0);

    let bedrooms = rooms
        .iter()
        .filter(|r| r.room_type == RoomType::Bedroom)
        .count() as f64;
    let privacy = clamp_score(bedrooms * PRIVACY_PER_BEDROOM);

    let circulation = clamp_score(furniture.len() as f64 / room_count * CIRCULATION_PER_ITEM);

    let average_room = used_space / room_count;
    let energy = clamp_score(average_room / 100.0 * 50.0);

    Ok(ScoreBreakdown {
        space_efficiency,
        natural_light,
        privacy,
        circulation,
        energy,
    })
}

/// Score a set of rooms and furniture against the declared floor area
pub fn score(rooms: &[Room], furniture: &[Furniture], total_area: f64) -> Result<Score> {
    let breakdown = score_breakdown(rooms, furniture, total_area)?;
    let score = breakdown.rounded();
    tracing::debug!(
        rooms = rooms.len(),
        furniture = furniture.len(),
        total_area,
        overall = score.overall,
        "Scored layout"
    );
    Ok(score)
}

/// Score a persisted layout blob
pub fn score_layout(layout: &Layout, total_area: f64) -> Result<Score> {
    score(&layout.rooms, &layout.furniture, total_area)
}
