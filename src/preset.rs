// PointKit
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::*;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::geometry::*;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// A starting point and the scale factors applied to it, in order.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct Preset {
    #[serde(default)]
    pub name: String,

    pub point: Point,

    #[serde(default)]
    pub scale: Vec<f64>,
}

impl Preset {
    pub fn new(point: Point) -> Self {
        Self {
            name: String::new(),
            point,
            scale: Vec::new(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PresetError> {
        Ok(toml::from_str(content)?)
    }
    pub fn from_toml_file(path: &Path) -> Result<Self, PresetError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
    pub fn from_json_file(path: &Path) -> Result<Self, PresetError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Returns the starting point followed by the point after each scale step.
    pub fn apply(&self) -> Vec<Point> {
        let mut point = self.point;
        let mut steps = Vec::with_capacity(self.scale.len() + 1);
        steps.push(point);

        for &factor in &self.scale {
            point.scale(factor);
            log::debug!("scale({}) -> {point}", format_number(factor));
            steps.push(point);
        }

        steps
    }
}

/// Loads a preset, choosing the format by file extension.
///
/// Files without a `toml` or `json` extension are tried as TOML first,
/// then as JSON.
pub fn load_preset_from_file(path: &Path) -> Result<(Preset, Option<PathBuf>), PresetError> {
    let preset = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => Preset::from_toml_file(path)?,
        Some("json") => Preset::from_json_file(path)?,
        _ => Preset::from_toml_file(path).or_else(|_| Preset::from_json_file(path))?,
    };
    Ok((preset, Some(path.to_path_buf())))
}

pub fn save_preset_to_file(preset: &Preset, path: &Path) -> Result<(), PresetError> {
    let toml = toml::to_string_pretty(preset)?;
    fs::write(path, toml)?;
    log::debug!("Saved preset to {}", path.display());
    Ok(())
}
