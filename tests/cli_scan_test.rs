//! CLI tests for scan, cursor, init and schema commands.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn chatmark() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatmark"));
    cmd.env("NO_COLOR", "1");
    cmd
}

const DOC: &str = "# Notes\n\n```rs\nfn main() {}\n```\n\n```klingon\nqapla'\n```\n\n```\nplain\n```\n";

#[test]
fn test_scan_lists_blocks() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("notes.md");
    fs::write(&file, DOC).unwrap();

    chatmark()
        .current_dir(temp_dir.path())
        .args(["--no-config", "scan", "notes.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.md:3-5: rust (Rust)"))
        .stdout(predicate::str::contains("notes.md:7-9: klingon (unknown)"))
        .stdout(predicate::str::contains("notes.md:11-13: no language"))
        .stdout(predicate::str::contains("3 fenced block(s), 1 with unknown language"));
}

#[test]
fn test_scan_strict_fails_on_unknown() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("notes.md"), DOC).unwrap();

    chatmark()
        .current_dir(temp_dir.path())
        .args(["--no-config", "scan", "--strict", "notes.md"])
        .assert()
        .code(1);
}

#[test]
fn test_scan_stdin_json() {
    let output = chatmark()
        .args(["--no-config", "--format", "json", "scan", "-"])
        .write_stdin("```yml\na: 1\n```\n")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["file"], "<stdin>");
    assert_eq!(parsed["blocks"][0]["language"], "yaml");
    assert_eq!(parsed["blocks"][0]["start_line"], 1);
}

#[test]
fn test_scan_missing_file() {
    chatmark()
        .args(["--no-config", "scan", "does-not-exist.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read does-not-exist.md"));
}

#[test]
fn test_cursor_inside_unclosed_block() {
    let draft = "look:\n```\n-- select";
    let offset = draft.len().to_string();
    chatmark()
        .args(["--no-config", "cursor", "-", offset.as_str()])
        .write_stdin(draft)
        .assert()
        .success()
        .stdout(predicate::str::contains("inside code block (keyboard: email-address)"));
}

#[test]
fn test_cursor_check_outside() {
    chatmark()
        .args(["--no-config", "cursor", "-", "2", "--check"])
        .write_stdin("plain text")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("outside code block (keyboard: default)"));
}

#[test]
fn test_cursor_keyboard_switch_disabled() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join(".chatmark.toml"),
        "[editor]\ncode-block-keyboard = false\n",
    )
    .unwrap();

    chatmark()
        .current_dir(temp_dir.path())
        .args(["cursor", "-", "5"])
        .write_stdin("```\ncode")
        .assert()
        .success()
        .stdout(predicate::str::contains("inside code block (keyboard: default)"));
}

#[test]
fn test_init_creates_and_refuses_overwrite() {
    let temp_dir = tempdir().unwrap();

    chatmark()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration file"));

    let written = fs::read_to_string(temp_dir.path().join(".chatmark.toml")).unwrap();
    assert!(written.contains("[images]"));

    chatmark()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_schema_describes_sections() {
    let output = chatmark().arg("schema").output().expect("Failed to execute command");
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let properties = schema["properties"].as_object().unwrap();
    assert!(properties.contains_key("languages"));
    assert!(properties.contains_key("images"));
    assert!(properties.contains_key("editor"));
}

#[test]
fn test_version() {
    chatmark()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("chatmark "));
}

#[test]
fn test_cursor_offset_in_utf16_units() {
    // Offset 10 lands on the newline after the fence; in bytes it would still be in the emoji
    chatmark()
        .args(["--no-config", "cursor", "-", "10", "--check"])
        .write_stdin("😀😀😀\n```\ncode")
        .assert()
        .success()
        .stdout(predicate::str::contains("inside code block"));
}

#[test]
fn test_completions_list_and_script() {
    chatmark()
        .args(["completions", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bash").and(predicate::str::contains("zsh")));

    chatmark()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chatmark"));
}
