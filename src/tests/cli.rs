use pretty_assertions::assert_eq;
use std::{env, fs, path::PathBuf};

use crate::{cli::*, geometry::*, preset::*, APP_NAME};

fn parse(args: &[&str]) -> Result<CliConfig, CliError> {
    let matches = command()
        .try_get_matches_from(std::iter::once(APP_NAME).chain(args.iter().copied()))
        .unwrap();
    resolve_config(&matches)
}

fn run_to_string(config: &CliConfig) -> (Point, String) {
    let mut out = Vec::new();
    let point = run(config, &mut out).unwrap();
    (point, String::from_utf8(out).unwrap())
}

fn temp_path(file_name: &str) -> PathBuf {
    env::temp_dir().join(format!("pointkit-cli-{}-{file_name}", std::process::id()))
}

#[test]
fn test_coordinates_only() {
    let config = parse(&["3", "4"]).unwrap();
    assert_eq!(config.preset, Preset::new(Point::new(3.0, 4.0)));
    assert_eq!(config.preset_path, None);
    assert!(!config.show_steps);

    let (point, output) = run_to_string(&config);
    assert_eq!(point, Point::new(3.0, 4.0));
    assert_eq!(output, "(3, 4)\n");
}

#[test]
fn test_scale_factors_in_order() {
    let config = parse(&["3", "4", "--scale", "2", "-s", "-0.5"]).unwrap();
    assert_eq!(config.preset.scale, vec![2.0, -0.5]);

    let (_, output) = run_to_string(&config);
    assert_eq!(output, "(-3, -4)\n");
}

#[test]
fn test_negative_coordinates() {
    let config = parse(&["-1.5", "-2", "--scale", "2"]).unwrap();
    let (_, output) = run_to_string(&config);
    assert_eq!(output, "(-3, -4)\n");
}

#[test]
fn test_show_steps() {
    let config = parse(&["3", "4", "--steps", "-s", "2", "-s", "0"]).unwrap();
    let (_, output) = run_to_string(&config);
    assert_eq!(output, "(3, 4)\n(6, 8)\n(0, 0)\n");
}

#[test]
fn test_non_finite_factor() {
    let config = parse(&["1", "-1", "--scale", "inf"]).unwrap();
    let (_, output) = run_to_string(&config);
    assert_eq!(output, "(Infinity, -Infinity)\n");
}

#[test]
fn test_negative_non_finite_values() {
    let config = parse(&["1", "1", "-s", "-inf"]).unwrap();
    assert_eq!(config.preset.scale, vec![f64::NEG_INFINITY]);
    let (_, output) = run_to_string(&config);
    assert_eq!(output, "(-Infinity, -Infinity)\n");

    let config = parse(&["-inf", "2", "--steps"]).unwrap();
    assert!(config.show_steps);
    let (_, output) = run_to_string(&config);
    assert_eq!(output, "(-Infinity, 2)\n");

    let config = parse(&["3", "-4", "-s", "-NaN"]).unwrap();
    let (_, output) = run_to_string(&config);
    assert_eq!(output, "(NaN, NaN)\n");
}

#[test]
fn test_flags_before_coordinates() {
    let config = parse(&["-s", "-1e3", "--steps", "1", "-1"]).unwrap();
    let (_, output) = run_to_string(&config);
    assert_eq!(output, "(1, -1)\n(-1000, 1000)\n");
}

#[test]
fn test_missing_preset_file_names_path_and_cause() {
    let path = temp_path("does-not-exist.toml");
    let err = parse(&["--file", path.to_str().unwrap()]).unwrap_err();

    assert!(matches!(err, CliError::LoadPreset(_, PresetError::Io(_))));
    let message = err.to_string();
    assert!(message.contains(path.to_str().unwrap()));
    assert!(message.contains("I/O error: "));
}

#[test]
fn test_missing_point() {
    let result = parse(&["--scale", "2"]);
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}

#[test]
fn test_file_and_coordinates_conflict() {
    let result = command().try_get_matches_from(["pointkit", "1", "2", "--file", "p.toml"]);
    assert!(result.is_err());
}

#[test]
fn test_file_factors_come_first() {
    let path = temp_path("file.toml");
    fs::write(&path, "scale = [3]\n\n[point]\nx = 1\ny = 2\n").unwrap();

    let config = parse(&["--file", path.to_str().unwrap(), "--scale", "0.5"]);
    fs::remove_file(&path).unwrap();
    let config = config.unwrap();

    assert_eq!(config.preset_path, Some(path));
    assert_eq!(config.preset.scale, vec![3.0, 0.5]);

    let (_, output) = run_to_string(&config);
    assert_eq!(output, "(1.5, 3)\n");
}

#[test]
fn test_save_final_point() {
    let path = temp_path("save.toml");
    let config = parse(&["3", "4", "-s", "2", "--save", path.to_str().unwrap()]).unwrap();

    run_to_string(&config);
    let saved = Preset::from_toml_file(&path);
    fs::remove_file(&path).unwrap();

    assert_eq!(saved.unwrap(), Preset::new(Point::new(6.0, 8.0)));
}
