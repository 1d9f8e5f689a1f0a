// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use anyhow::{Context, Result};
use homeplan_core::score_layout;

use super::{load_scene, to_json};
use crate::config::Config;

/// Score a saved layout against its total area.
pub fn run(config: &Config, path: &Path, area: f64, snap: bool) -> Result<String> {
    let store = load_scene(path, config.grid_size, snap)?;
    let overlaps = store.state().overlapping_rooms();
    if !overlaps.is_empty() {
        tracing::warn!(count = overlaps.len(), "Layout has overlapping rooms");
    }

    let score = score_layout(&store.to_layout(), area).context("failed to score layout")?;
    tracing::info!(overall = score.overall, "Scored layout");
    to_json(&score, config.pretty_json)
}
