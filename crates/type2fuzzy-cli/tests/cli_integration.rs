//! Integration tests for the type2fuzzy binary
//!
//! These tests drive the CLI end to end using assert_cmd.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const EXAMPLE: &str = "(0.90/0.00 + 0.50/0.20 + 0.20/0.40 + 0.35/0.61 + 0.10/0.80)/1.00 \
                       + (0.50/0.00+0.35/0.20+0.35/0.40+0.20/0.60+0.50/0.80)/2.00";

/// CLI command isolated from the caller's configuration and log filter
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("type2fuzzy").expect("Failed to find type2fuzzy binary");
    cmd.env_remove("RUST_LOG").env_remove("TYPE2FUZZY_CONFIG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    path
}

fn example_file(dir: &TempDir) -> PathBuf {
    write_file(dir, "example.t2fs", EXAMPLE)
}

fn json_output(args: &[&str], file: &Path) -> serde_json::Value {
    let output = cli()
        .args(["--no-config", "--output-format", "json"])
        .args(args)
        .arg(file)
        .output()
        .expect("Failed to execute CLI");
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Output should be valid JSON")
}

// ============================================================================
// General
// ============================================================================

#[test]
fn test_help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reduce"))
        .stdout(predicate::str::contains("fou"))
        .stdout(predicate::str::contains("zslice"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_command() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("type2fuzzy"));
}

#[test]
fn test_missing_file_fails() {
    cli()
        .args(["--no-config", "reduce", "does-not-exist.t2fs"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_malformed_set_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "bad.t2fs", "(0.5/0.2 + oops)/1.0");
    cli()
        .args(["--no-config", "reduce"])
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));
}

// ============================================================================
// Reduce
// ============================================================================

#[test]
fn test_reduce_text_output() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    cli()
        .args(["--no-config", "--no-color", "reduce", "--method", "mendel-john"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Centroid (mendel-john)"))
        .stdout(predicate::str::contains("/"));
}

#[test]
fn test_mendel_john_matches_partial_centroid() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    let exhaustive = json_output(&["reduce", "--method", "mendel-john"], &file);
    let pruned = json_output(&["reduce", "--method", "partial-centroid"], &file);

    assert_eq!(exhaustive["centroid"]["kind"], "type1");
    assert_eq!(exhaustive["centroid"], pruned["centroid"]);
    assert!(!exhaustive["centroid"]["points"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[test]
fn test_precision_flag() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    let report = json_output(&["--precision", "2", "reduce", "-m", "partial-centroid"], &file);
    assert_eq!(report["precision"], 2);
    for point in report["centroid"]["points"].as_array().unwrap() {
        let x = point["x"].as_f64().unwrap();
        assert!((x * 100.0 - (x * 100.0).round()).abs() < 1e-9);
    }
}

#[test]
fn test_karnik_mendel_on_footprint() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    let report = json_output(&["reduce", "--method", "karnik-mendel", "--defuzzify"], &file);
    assert_eq!(report["centroid"]["kind"], "interval");
    assert_eq!(report["centroid"]["left"], 2.0);
    assert_eq!(report["centroid"]["right"], 2.0);
    assert_eq!(report["defuzzified"], 2.0);
}

#[test]
fn test_karnik_mendel_interval_input() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "constant.it2fs", "[0.5,0.5]/1 + [0.5,0.5]/2 + [0.5,0.5]/3");
    cli()
        .args(["--no-config", "--no-color", "reduce", "-m", "karnik-mendel", "--interval"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("[2.00000]"));
}

#[test]
fn test_full_information_logs_iterations() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "skewed.it2fs", "[0.2,0.8]/1 + [0.3,0.9]/2 + [0.1,0.5]/4");
    cli()
        .args([
            "--no-config",
            "--no-color",
            "--information",
            "full",
            "reduce",
            "-m",
            "karnik-mendel",
            "--interval",
        ])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Karnik-Mendel iteration"));

    // the default level keeps the iterations quiet
    cli()
        .args(["--no-config", "--no-color", "reduce", "-m", "karnik-mendel", "--interval"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Karnik-Mendel iteration").not());
}

#[test]
fn test_full_information_logs_embedded_sets() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    cli()
        .args(["--no-config", "--no-color", "--information", "full", "reduce", "-m", "mendel-john"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("embedded set"));
}

#[test]
fn test_interval_input_rejected_for_other_methods() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "constant.it2fs", "[0.5,0.5]/1 + [0.5,0.5]/2");
    cli()
        .args(["--no-config", "reduce", "-m", "mendel-john", "--interval"])
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("only accepted by karnik-mendel"));
}

#[test]
fn test_hagras_slices() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    let report = json_output(&["reduce", "-m", "hagras", "--slices", "5", "--parallel"], &file);
    assert_eq!(report["centroid"]["kind"], "alpha-cut");
    let levels: Vec<f64> = report["centroid"]["cuts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|cut| cut["z"].as_f64().unwrap())
        .collect();
    assert_eq!(levels, vec![0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn test_embedded_set_limit() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    cli()
        .args(["--no-config", "reduce", "-m", "mendel-john", "--max-embedded-sets", "10"])
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("25"));
}

#[test]
fn test_invalid_precision_rejected() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    cli()
        .args(["--no-config", "--precision", "40", "reduce"])
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("precision"));
}

// ============================================================================
// Slicing
// ============================================================================

#[test]
fn test_footprint_of_uncertainty() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    let report = json_output(&["fou"], &file);
    let intervals = report["intervals"].as_array().unwrap();
    assert_eq!(intervals.len(), 2);
    assert_eq!(intervals[0]["x"], 1.0);
    assert_eq!(intervals[0]["lower"], 0.0);
    assert_eq!(intervals[0]["upper"], 0.8);
}

#[test]
fn test_zslice_text() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    cli()
        .args(["--no-config", "--no-color", "zslice", "--z", "0.5"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[0.0000, 0.2000]/1.0000 + [0.0000, 0.8000]/2.0000",
        ));
}

#[test]
fn test_zslice_above_every_grade() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    cli()
        .args(["--no-config", "--no-color", "zslice", "--z", "1.0"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Set: no primary value reaches this level"));
}

#[test]
fn test_zslice_out_of_range() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    cli()
        .args(["--no-config", "zslice", "--z", "1.5"])
        .arg(&file)
        .assert()
        .code(1);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_applies_and_flags_override() {
    let dir = TempDir::new().unwrap();
    let file = example_file(&dir);
    let config = write_file(
        &dir,
        "config.toml",
        "output_format = \"json\"\nslices = 3\n\n[reduction]\nprecision = 2\n",
    );

    let output = cli()
        .arg("--config")
        .arg(&config)
        .args(["reduce", "-m", "hagras"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["precision"], 2);
    assert!(report["centroid"]["cuts"].as_array().unwrap().len() <= 3);

    let output = cli()
        .arg("--config")
        .arg(&config)
        .args(["--precision", "4", "reduce"])
        .arg(&file)
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["precision"], 4);
}

#[test]
fn test_config_init_path_and_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("type2fuzzyrc.toml");

    cli()
        .env("TYPE2FUZZY_CONFIG", &path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type2fuzzyrc.toml"));

    cli()
        .env("TYPE2FUZZY_CONFIG", &path)
        .args(["--no-color", "config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file"));
    assert!(path.exists());

    // a second init refuses to overwrite
    cli()
        .env("TYPE2FUZZY_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .code(1);

    cli()
        .env("TYPE2FUZZY_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[reduction]"))
        .stdout(predicate::str::contains("precision = 5"));
}

#[test]
fn test_broken_config_file_reported() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "broken.toml", "slices = \"many\"");
    cli()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
