// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.

use homeplan_core::GRID_SIZE;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Grid cell used when snapping rooms loaded into the scene.
    pub grid_size: f64,
    /// Default walkthrough playback speed.
    pub walkthrough_speed: f64,
    /// Simulated frames per second for walkthrough playback.
    pub frame_rate: u32,
    /// Style passed to variant generation when none is given.
    pub variant_style: String,
    /// Pretty-print JSON output.
    pub pretty_json: bool,
    /// Emit logs as JSON lines.
    pub log_json: bool,
    /// Log filter directive.
    pub log_filter: String,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => matches!(value.trim(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            grid_size: env_or("HOMEPLAN_GRID_SIZE", GRID_SIZE),
            walkthrough_speed: env_or("HOMEPLAN_WALKTHROUGH_SPEED", 1.0),
            frame_rate: env_or("HOMEPLAN_FRAME_RATE", 60u32).max(1),
            variant_style: std::env::var("HOMEPLAN_STYLE").unwrap_or_else(|_| "modern".into()),
            pretty_json: env_flag("HOMEPLAN_PRETTY_JSON", true),
            log_json: env_flag("HOMEPLAN_LOG_JSON", false),
            log_filter: std::env::var("HOMEPLAN_LOG")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info,homeplan=debug,homeplan_core=debug,homeplan_scene=debug,homeplan_walkthrough=debug".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
