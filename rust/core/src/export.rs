// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Export documents for downloaded layouts

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{round_half_up, GRID_SIZE};
use crate::model::{Layout, Room};
use crate::score::Score;

/// JSON export payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub project_name: String,
    /// RFC 3339 timestamp, UTC
    pub exported_at: String,
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<Score>,
}

impl ExportDocument {
    /// Build a document stamped with the current time
    pub fn new(project_name: impl Into<String>, layout: Layout, scores: Option<Score>) -> Self {
        Self::at(project_name, layout, scores, Utc::now())
    }

    pub fn at(
        project_name: impl Into<String>,
        layout: Layout,
        scores: Option<Score>,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            layout,
            scores,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Plain-text report with room details and labelled scores
    pub fn report(&self) -> String {
        let mut lines = vec![self.project_name.clone(), format!("Exported: {}", self.exported_at)];

        if !self.layout.rooms.is_empty() {
            lines.push(String::new());
            lines.push("Room Details".to_string());
            lines.extend(
                self.layout
                    .rooms
                    .iter()
                    .map(|room| format!("  {}", RoomSummary::from_room(room))),
            );
        }

        if let Some(scores) = &self.scores {
            lines.push(String::new());
            lines.push("Layout Scores".to_string());
            lines.extend(
                scores
                    .labelled()
                    .iter()
                    .map(|(label, value)| format!("  {label}: {value}/100")),
            );
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Room dimensions in grid units
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub name: String,
    pub width_units: i64,
    pub height_units: i64,
    pub area_units: f64,
}

impl RoomSummary {
    pub fn from_room(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            width_units: round_half_up(room.width / GRID_SIZE) as i64,
            height_units: round_half_up(room.height / GRID_SIZE) as i64,
            area_units: room.area() / GRID_SIZE / GRID_SIZE,
        }
    }
}

impl std::fmt::Display for RoomSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} × {} units ({:.1} sq units)",
            self.name, self.width_units, self.height_units, self.area_units
        )
    }
}
