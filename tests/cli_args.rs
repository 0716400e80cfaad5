//! Tests for the demo binary's command line.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn demo_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_buffet-demo"))
}

#[test]
fn test_help_lists_field_options() {
    let output = demo_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--display-format"));
    assert!(stdout.contains("--wait-ms"));
    assert!(stdout.contains("--with-default-value"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[[date_fields]]\nname = \"\"\n").unwrap();

    let output = demo_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Date field #0"));
}

#[test]
fn test_invalid_display_format_flag_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = demo_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--display-format")
        .arg("hello")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no year, month or day token"));
}
