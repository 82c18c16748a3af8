//! Smoke tests for the desk-calculator binary
//!
//! Only the headless `--press` mode is exercised; the TUI needs a real
//! terminal.

#![cfg(feature = "tui")]
#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn desk_calculator() -> Command {
    Command::cargo_bin("desk-calculator").expect("desk-calculator binary should exist")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help_flag() {
    desk_calculator()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--press"))
        .stdout(predicate::str::contains("--error-marker"));
}

#[test]
fn test_trace_requires_press() {
    desk_calculator().arg("--trace").assert().failure();
}

// ============================================================================
// Headless Scripts
// ============================================================================

#[test]
fn test_press_chained_arithmetic() {
    desk_calculator()
        .args(["--press", "2 + 3 * 4 ="])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_press_division_by_zero() {
    desk_calculator()
        .args(["--press", "5 / 0 ="])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_press_leading_operator() {
    desk_calculator()
        .args(["--press", "- 3 ="])
        .assert()
        .success()
        .stdout("-3\n");
}

#[test]
fn test_press_percent_and_sign() {
    desk_calculator()
        .args(["--press", "5 0 % ±"])
        .assert()
        .success()
        .stdout("-0.5\n");
}

#[test]
fn test_press_empty_script() {
    desk_calculator()
        .args(["--press", ""])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_press_unknown_label_fails() {
    desk_calculator()
        .args(["--press", "2 ^ 3"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: Unknown button"));
}

#[test]
fn test_trace_prints_every_display() {
    desk_calculator()
        .args(["--press", "8 / 2 =", "--trace"])
        .assert()
        .success()
        .stdout(" 8 │ 8\n / │ 8\n 2 │ 2\n = │ 4\n");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_error_marker_flag() {
    desk_calculator()
        .args(["--press", "1 / 0 =", "--error-marker", "E"])
        .assert()
        .success()
        .stdout("E\n");
}

#[test]
fn test_numeric_error_marker_rejected() {
    desk_calculator()
        .args(["--press", "1", "--error-marker", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("calc.json");
    fs::write(&path, r#"{"error_marker": "Oops"}"#).unwrap();

    desk_calculator()
        .arg("--config")
        .arg(&path)
        .args(["--press", "3 / 0 ="])
        .assert()
        .success()
        .stdout("Oops\n");
}

#[test]
fn test_flag_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("calc.json");
    fs::write(&path, r#"{"error_marker": "Oops"}"#).unwrap();

    desk_calculator()
        .arg("--config")
        .arg(&path)
        .args(["--error-marker", "Nope", "--press", "3 / 0 ="])
        .assert()
        .success()
        .stdout("Nope\n");
}

#[test]
fn test_invalid_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("calc.json");
    fs::write(&path, "{ not json").unwrap();

    desk_calculator()
        .arg("--config")
        .arg(&path)
        .args(["--press", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config JSON"));
}

#[test]
fn test_missing_config_file() {
    let temp = TempDir::new().unwrap();

    desk_calculator()
        .arg("--config")
        .arg(temp.path().join("absent.json"))
        .args(["--press", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_file_written() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("calc.log");

    desk_calculator()
        .arg("--log-file")
        .arg(&log)
        .args(["--press", "5 / 0 ="])
        .env("RUST_LOG", "desk_calculator=debug")
        .assert()
        .success()
        .stdout("Error\n");

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("calculation failed"));
    assert!(!contents.contains("\u{1b}["));
}
