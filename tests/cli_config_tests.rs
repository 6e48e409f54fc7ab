//! End-to-end tests for `vilview config` command.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Path to the vilview binary
fn vilview_bin() -> &'static str {
    env!("CARGO_BIN_EXE_vilview")
}

/// Creates a Command with an isolated config directory for testing.
/// Pass in a config directory path to share between multiple commands in the same test.
fn isolated_config_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(vilview_bin());
    cmd.env("VILVIEW_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

#[test]
fn test_config_show_default() {
    let config_dir = TempDir::new().unwrap();

    let output = isolated_config_command(&["config"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Should show config successfully. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("vilview Configuration"));
    assert!(stdout.contains("Layout: jis"), "Default layout is jis");
    assert!(stdout.contains("(not created)"));
}

#[test]
fn test_config_set_layout_round_trip() {
    let config_dir = TempDir::new().unwrap();

    let output = isolated_config_command(&["config", "--set-layout", "us"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Should save config successfully. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration updated successfully."));

    let config_file = config_dir.path().join("config.toml");
    assert!(config_file.exists(), "Config file should be written");
    let content = fs::read_to_string(&config_file).unwrap();
    assert!(content.contains("layout = \"us\""));

    // A second invocation reads the saved value back.
    let output = isolated_config_command(&["config"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Layout: us"));
    assert!(!stdout.contains("(not created)"));
}

#[test]
fn test_config_layout_feeds_other_commands() {
    let config_dir = TempDir::new().unwrap();

    let output = isolated_config_command(&["config", "--set-layout", "us"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    // Without --layout, keycode resolution uses the persisted default.
    let output = isolated_config_command(&["keycode", "KC_QUOTE", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
    assert_eq!(result["label"], "'", "US layout from config");
}

#[test]
fn test_config_missing_file_defaults_to_jis() {
    let config_dir = TempDir::new().unwrap();

    let output = isolated_config_command(&["keycode", "KC_QUOTE", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
    assert_eq!(result["label"], ":", "JIS layout by default");
}

#[test]
fn test_config_malformed_file_is_validation_error() {
    let config_dir = TempDir::new().unwrap();
    fs::write(config_dir.path().join("config.toml"), "layout = 5").unwrap();

    let output = isolated_config_command(&["config"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Malformed config should exit with code 1"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error:"),
        "Should have error message on stderr"
    );

    // Commands that fall back to the config hit the same error.
    let output = isolated_config_command(&["keycode", "KC_A"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_layout_flag_bypasses_malformed_config() {
    let config_dir = TempDir::new().unwrap();
    fs::write(config_dir.path().join("config.toml"), "layout = 5").unwrap();

    let output = isolated_config_command(&["keycode", "KC_A", "--layout", "us"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "--layout should not consult the config file. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
