// PointKit
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line interface.
//!
//! Parses arguments into a [`CliConfig`] and runs it: builds the point,
//! applies every scale factor and prints the rendering.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Arg, ArgAction, ArgMatches, Command};
use function_name::named;
use owo_colors::OwoColorize;
use thiserror::Error;

use crate::{geometry::*, preset::*, *};

/// Errors that may occur while parsing arguments or running the tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to load {}: {}", .0.display(), .1)]
    LoadPreset(PathBuf, #[source] PresetError),

    #[error("Preset error: {0}")]
    Preset(#[from] PresetError),

    #[error("Failed to write output")]
    Io(#[from] io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result of command-line parsing.
#[derive(Debug)]
pub struct CliConfig {
    /// Point and scale factors to apply.
    ///
    /// Factors given with `--scale` come after those read from a file.
    pub preset: Preset,

    /// Path to the preset file, when one was given.
    pub preset_path: Option<PathBuf>,

    /// Print every intermediate point instead of only the last one.
    pub show_steps: bool,

    /// Where to write the final point as a new preset.
    pub save_path: Option<PathBuf>,
}

pub fn command() -> Command {
    Command::new(APP_NAME)
        .author(APP_AUTHOR)
        .version(APP_SEMVER)
        .about(APP_ABOUT)
        .arg(
            Arg::new("x")
                .value_name("X")
                .help("Horizontal coordinate")
                .allow_hyphen_values(true)
                .requires("y")
                .conflicts_with("file")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("y")
                .value_name("Y")
                .help("Vertical coordinate")
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to TOML or JSON preset file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("scale")
                .short('s')
                .long("scale")
                .value_name("N")
                .help("Scale factor; may be repeated")
                .allow_hyphen_values(true)
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("steps")
                .long("steps")
                .help("Print the point after every scale step")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .value_name("FILE")
                .help("Write the final point as a TOML preset")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .after_help("Either X Y or --file must be given")
}

/// Resolves the preset described by parsed arguments.
pub fn resolve_config(matches: &ArgMatches) -> Result<CliConfig, CliError> {
    let (mut preset, preset_path) = match (
        matches.get_one::<PathBuf>("file"),
        matches.get_one::<f64>("x"),
        matches.get_one::<f64>("y"),
    ) {
        (Some(path), _, _) => load_preset_from_file(path)
            .map_err(|err| CliError::LoadPreset(path.clone(), err))?,
        (None, Some(&x), Some(&y)) => (Preset::new(Point::new(x, y)), None),
        _ => {
            return Err(CliError::InvalidInput(
                "expected X Y coordinates or --file".into(),
            ))
        }
    };

    if let Some(factors) = matches.get_many::<f64>("scale") {
        preset.scale.extend(factors.copied());
    }

    Ok(CliConfig {
        preset,
        preset_path,
        show_steps: matches.get_flag("steps"),
        save_path: matches.get_one::<PathBuf>("save").cloned(),
    })
}

/// Applies the configured scale factors and prints the result to `out`.
///
/// Returns the final point.
#[named]
pub fn run(config: &CliConfig, out: &mut impl Write) -> Result<Point, CliError> {
    log::debug!("{}", function_name!().white().bold());

    let preset = &config.preset;
    if let Some(path) = &config.preset_path {
        log::info!("Loaded {}", path.display());
    }
    if !preset.name.is_empty() {
        log::info!("Running preset '{}'", preset.name);
    }

    let steps = preset.apply();
    let last = *steps.last().unwrap_or(&preset.point);

    if config.show_steps {
        for point in &steps {
            writeln!(out, "{}", point.as_string())?;
        }
    } else {
        writeln!(out, "{}", last.as_string())?;
    }

    if let Some(path) = &config.save_path {
        let saved = Preset {
            name: preset.name.clone(),
            ..Preset::new(last)
        };
        save_preset_to_file(&saved, path)?;
        log::info!("Saved {}", path.display());
    }

    Ok(last)
}
