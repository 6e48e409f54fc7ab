//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;

/// Creates a basic two-layer Vial export.
///
/// Layer 0 is a full 2x3 grid of plain keys; layer 1 mixes transparent,
/// empty, tap-dance, and macro cells. One encoder, two macro slots (one
/// empty), two tap-dance slots (one empty), two combo slots (one empty),
/// and three settings.
pub fn test_keymap_basic() -> Value {
    json!({
        "version": 6,
        "uid": 123_456_789_i64,
        "layout": [
            [
                ["KC_Q", "KC_W", "KC_E"],
                ["KC_LSFT", "KC_SPC", "LT1(KC_ENT)"]
            ],
            [
                ["KC_TRNS", "KC_1", -1],
                ["KC_NO", "TD(0)", "M(0)"]
            ]
        ],
        "encoder_layout": [
            [["KC_VOLD", "KC_VOLU"]],
            [["KC_PGUP", "KC_PGDN"]]
        ],
        "macro": [
            [["text", "hi"], ["tap", "KC_LCTL", "KC_C"]],
            []
        ],
        "tap_dance": [
            ["KC_ESC", "KC_LCTL", "KC_CAPS", "KC_NO", 180],
            ["KC_NO", "KC_NO", "KC_NO", "KC_NO", 200]
        ],
        "combo": [
            ["KC_A", "KC_S", "KC_NO", "KC_NO", "KC_ESC"],
            ["KC_NO", "KC_NO", "KC_NO", "KC_NO", "KC_NO"]
        ],
        "settings": {"2": 1, "11": 6, "18": 200}
    })
}

/// Creates an export whose tap-dance table exercises the label rules.
///
/// TD0 is a tap/double-tap pair (so it gets a compact two-glyph label),
/// TD1 has a distinct hold action (so it keeps the indexed fallback).
pub fn test_keymap_with_tap_dances() -> Value {
    json!({
        "version": 6,
        "uid": "987654321",
        "layout": [
            [
                ["TD(0)", "TD(1)", "KC_A"]
            ]
        ],
        "tap_dance": [
            ["KC_QUOTE", "KC_NO", "KC_SCOLON", "KC_NO", 200],
            ["KC_A", "KC_LCTL", "KC_B", "KC_NO", 150]
        ]
    })
}

/// Creates the smallest parseable export: required fields only.
pub fn test_keymap_empty_sections() -> Value {
    json!({
        "version": 6,
        "uid": 1,
        "layout": []
    })
}

/// Writes a keymap document to a `.vil` file for CLI testing.
pub fn write_keymap_file(keymap: &Value, path: &Path) -> std::io::Result<()> {
    let text = serde_json::to_string_pretty(keymap)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    fs::write(path, text)
}

/// Creates a keymap file in a temp directory and returns the path.
pub fn create_temp_keymap_file(keymap: &Value) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let keymap_path = temp_dir.path().join("board.vil");
    write_keymap_file(keymap, &keymap_path).expect("Failed to write keymap file");
    (keymap_path, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_basic_keymap_parses() {
        let text = serde_json::to_string(&test_keymap_basic()).unwrap();
        let keymap = vilview::parser::parse_keymap(&text).unwrap();
        assert_eq!(keymap.layers.len(), 2);
        assert_eq!(keymap.encoders.len(), 2);
        assert_eq!(keymap.macros.len(), 2);
        assert!(keymap.macros[1].is_empty);
        assert_eq!(keymap.settings.len(), 3);
    }

    #[test]
    fn test_fixture_tap_dance_keymap_parses() {
        let text = serde_json::to_string(&test_keymap_with_tap_dances()).unwrap();
        let keymap = vilview::parser::parse_keymap(&text).unwrap();
        assert_eq!(keymap.tap_dances.len(), 2);
        assert!(!keymap.tap_dances[0].is_empty);
    }

    #[test]
    fn test_fixture_file_round_trip() {
        let (path, _temp) = create_temp_keymap_file(&test_keymap_basic());
        let keymap = vilview::parser::load_keymap(&path).unwrap();
        assert_eq!(keymap.uid, "123456789");
    }
}
