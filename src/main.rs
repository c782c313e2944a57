// PointKit
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

mod cli;
mod geometry;
mod preset;

use std::process::ExitCode;

pub const APP_NAME: &str = "pointkit";
pub const APP_ABOUT: &str = "Build, scale and render 2D points";
pub const APP_AUTHOR: &str = "Harlen Batagelo, hbatagelo@gmail.com";
pub const APP_SEMVER: &str = "1.0.0";

fn init_logging(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose || cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    simple_logger::SimpleLogger::new().with_level(level).init()
}

fn main() -> ExitCode {
    let matches = cli::command().get_matches();

    if let Err(err) = init_logging(matches.get_flag("verbose")) {
        eprintln!("Failed to initialize logging: {err}");
    }

    let result = cli::resolve_config(&matches)
        .and_then(|config| cli::run(&config, &mut std::io::stdout().lock()));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
