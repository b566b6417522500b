//! Runs the real binary; only flags that exit before the terminal UI starts.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn splitbill_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_splitbill"))
}

#[test]
fn help_lists_options() {
    let output = splitbill_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
    assert!(stdout.contains("--no-seed"));
    assert!(stdout.contains("--check-config"));
}

#[test]
fn check_config_with_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    let output = splitbill_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--check-config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Friends: 3"));
    assert!(stdout.contains("Currency: £"));
}

#[test]
fn invalid_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[[friends]]\nid = 1\nname = \"\"\nimage = \"\"\n").unwrap();

    let output = splitbill_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--check-config")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}
