// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hand-rolled argument parsing for the `homeplan` binary.

use std::path::PathBuf;

use crate::error::CliError;

pub const USAGE: &str = "\
Usage:
  homeplan score <layout.json> --area <A> [--snap]
  homeplan variants --bedrooms <n> --area <A> [--style <s>]
  homeplan walkthrough <layout.json> [--speed <s>] [--snap]
  homeplan export <layout.json> --name <project> --area <A> [--snap]

  --snap  move rooms and furniture onto the grid (HOMEPLAN_GRID_SIZE) after loading";

/// Parsed subcommand.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Score {
        layout: PathBuf,
        area: f64,
        snap: bool,
    },
    Variants {
        bedrooms: u32,
        area: f64,
        style: Option<String>,
    },
    Walkthrough {
        layout: PathBuf,
        speed: Option<f64>,
        snap: bool,
    },
    Export {
        layout: PathBuf,
        name: String,
        area: f64,
        snap: bool,
    },
    Help,
}

#[derive(Default)]
struct Options {
    positional: Vec<String>,
    area: Option<f64>,
    bedrooms: Option<u32>,
    style: Option<String>,
    speed: Option<f64>,
    name: Option<String>,
    snap: bool,
}

fn value<I: Iterator<Item = String>>(args: &mut I, option: &'static str) -> Result<String, CliError> {
    args.next().ok_or(CliError::MissingValue(option))
}

fn parsed<T: std::str::FromStr>(raw: String, option: &'static str) -> Result<T, CliError> {
    raw.parse().map_err(|_| CliError::InvalidValue { option, value: raw })
}

impl Options {
    fn collect<I: Iterator<Item = String>>(mut args: I) -> Result<Self, CliError> {
        let mut options = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--area" => options.area = Some(parsed(value(&mut args, "--area")?, "--area")?),
                "--bedrooms" => {
                    options.bedrooms = Some(parsed(value(&mut args, "--bedrooms")?, "--bedrooms")?)
                }
                "--style" => options.style = Some(value(&mut args, "--style")?),
                "--speed" => options.speed = Some(parsed(value(&mut args, "--speed")?, "--speed")?),
                "--name" => options.name = Some(value(&mut args, "--name")?),
                "--snap" => options.snap = true,
                other if other.starts_with("--") => return Err(CliError::UnknownOption(other.into())),
                _ => options.positional.push(arg),
            }
        }
        Ok(options)
    }

    fn layout(&mut self) -> Result<PathBuf, CliError> {
        if self.positional.is_empty() {
            return Err(CliError::MissingArgument("<layout.json>"));
        }
        Ok(PathBuf::from(self.positional.remove(0)))
    }
}

impl Command {
    /// Parse everything after the program name.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, CliError> {
        let mut args = args.into_iter();
        let command = args.next().ok_or(CliError::MissingCommand)?;
        if matches!(command.as_str(), "help" | "--help" | "-h") {
            return Ok(Command::Help);
        }

        let mut options = Options::collect(args)?;
        let command = match command.as_str() {
            "score" => Command::Score {
                layout: options.layout()?,
                area: options.area.ok_or(CliError::MissingArgument("--area"))?,
                snap: options.snap,
            },
            "variants" => Command::Variants {
                bedrooms: options.bedrooms.ok_or(CliError::MissingArgument("--bedrooms"))?,
                area: options.area.ok_or(CliError::MissingArgument("--area"))?,
                style: options.style.take(),
            },
            "walkthrough" => Command::Walkthrough {
                layout: options.layout()?,
                speed: options.speed,
                snap: options.snap,
            },
            "export" => Command::Export {
                layout: options.layout()?,
                name: options.name.take().ok_or(CliError::MissingArgument("--name"))?,
                area: options.area.ok_or(CliError::MissingArgument("--area"))?,
                snap: options.snap,
            },
            other => return Err(CliError::UnknownCommand(other.into())),
        };
        Ok(command)
    }
}
