//! CLI tests for the image-size command.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn image_size(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatmark"));
    cmd.env("NO_COLOR", "1").args(["--no-config", "image-size"]).args(args);
    cmd
}

#[test]
fn test_explicit_size_wins() {
    image_size(&["--width", "100", "--height", "50", "--known-width", "400", "--known-height", "400"])
        .assert()
        .success()
        .stdout("100x50\n");
}

#[test]
fn test_ratio_derived_height() {
    image_size(&["--width", "100", "--known-width", "200", "--known-height", "100"])
        .assert()
        .success()
        .stdout("100x50\n");
}

#[test]
fn test_square_without_metadata() {
    image_size(&["--width", "50"]).assert().success().stdout("50x50\n");
}

#[test]
fn test_layout_fallback() {
    image_size(&["--layout-width", "300"]).assert().success().stdout("300x300\n");
    image_size(&[]).assert().success().stdout("320x320\n");
}

#[test]
fn test_viewport_from_config() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("chatmark.toml"),
        "[images]\nwindow-width = 390\nwindow-height = 844\n",
    )
    .unwrap();

    let run = |args: &[&str]| {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatmark"));
        cmd.current_dir(temp_dir.path()).arg("image-size").args(args);
        cmd
    };

    run(&[]).assert().success().stdout("320x320\n");
    run(&["--reply"]).assert().success().stdout("309x309\n");
}

#[test]
fn test_json_output() {
    let output = image_size(&["--height", "30", "--known-width", "200", "--known-height", "100", "--format", "json"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["width"], 60.0);
    assert_eq!(parsed["height"], 30.0);
}

#[test]
fn test_rejects_non_numeric_width() {
    image_size(&["--width", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
