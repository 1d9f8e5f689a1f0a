// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Homeplan command-line tool.
//!
//! Scores saved layouts, generates room-arrangement variants, simulates the
//! 3D walkthrough and writes export documents.
//!
//! # Commands
//!
//! - `score <layout.json> --area <A>` - Layout score as JSON
//! - `variants --bedrooms <n> --area <A> [--style <s>]` - Scored variants
//! - `walkthrough <layout.json> [--speed <s>]` - Playback simulation report
//! - `export <layout.json> --name <project> --area <A>` - Export document and summary
//!
//! `--snap` on the layout commands moves every room and furniture item onto
//! the `HOMEPLAN_GRID_SIZE` grid before the command runs.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod config;
mod error;

use args::{Command, USAGE};
use config::Config;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log_json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

fn run(config: &Config, command: Command) -> Result<String> {
    match command {
        Command::Score { layout, area, snap } => commands::score::run(config, &layout, area, snap),
        Command::Variants { bedrooms, area, style } => {
            commands::variants::run(config, bedrooms, area, style.as_deref())
        }
        Command::Walkthrough { layout, speed, snap } => {
            commands::walkthrough::run(config, &layout, speed, snap)
        }
        Command::Export {
            layout,
            name,
            area,
            snap,
        } => commands::export::run(config, &layout, &name, area, snap),
        Command::Help => Ok(USAGE.to_string()),
    }
}

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    tracing::debug!(?command, grid_size = config.grid_size, "Running command");
    let output = run(&config, command)?;
    println!("{output}");
    Ok(())
}
