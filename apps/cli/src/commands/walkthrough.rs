// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use anyhow::{Context, Result};
use homeplan_walkthrough::{room_boxes, total_duration, Camera, PlaybackState, Walkthrough, WalkthroughConfig};
use serde::Serialize;

use super::{load_scene, to_json};
use crate::config::Config;

/// Frame budget past the path length before giving up on completion.
const FRAME_SLACK: u64 = 2;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackReport {
    pub rooms: usize,
    pub boxes: usize,
    pub keyframes: usize,
    pub path_seconds: f64,
    pub speed: f64,
    pub frames: u64,
    pub completed: bool,
    pub camera: Camera,
}

/// Simulate a walkthrough of a saved layout at the configured frame rate.
pub fn simulate(config: &Config, path: &Path, speed: Option<f64>, snap: bool) -> Result<PlaybackReport> {
    let store = load_scene(path, config.grid_size, snap)?;
    let rooms = store.state().rooms();
    let speed = speed.unwrap_or(config.walkthrough_speed);

    let mut walkthrough = Walkthrough::new(WalkthroughConfig {
        speed,
        ..WalkthroughConfig::default()
    })
    .context("invalid walkthrough settings")?;

    let mut camera = Camera::default();
    walkthrough.play(rooms);

    let delta = 1.0 / f64::from(config.frame_rate);
    let path_seconds = total_duration(walkthrough.keyframes());
    let max_frames = (path_seconds / speed * f64::from(config.frame_rate)).ceil() as u64 + FRAME_SLACK;

    let mut frames = 0;
    while frames < max_frames && walkthrough.tick(delta, &mut camera) == PlaybackState::Playing {
        frames += 1;
    }

    let report = PlaybackReport {
        rooms: rooms.len(),
        boxes: room_boxes(rooms, None).len(),
        keyframes: walkthrough.keyframes().len(),
        path_seconds,
        speed,
        frames,
        completed: walkthrough.state() == PlaybackState::Completed,
        camera,
    };
    tracing::info!(frames, completed = report.completed, "Simulated walkthrough");
    Ok(report)
}

pub fn run(config: &Config, path: &Path, speed: Option<f64>, snap: bool) -> Result<String> {
    let report = simulate(config, path, speed, snap)?;
    to_json(&report, config.pretty_json)
}
