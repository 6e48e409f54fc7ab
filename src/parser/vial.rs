//! Vial `.vil` export parser and keymap normalizer.
//!
//! A `.vil` file is loosely typed JSON: cells may be strings or integers,
//! optional sections may be absent, and leaf values may be malformed without
//! the file as a whole being unusable. Only the top-level structure is typed
//! here; leaves stay as `serde_json::Value` and are normalized permissively
//! by [`decode`]. The single fatal path is a document that is not valid JSON
//! or is missing a required top-level field.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::constants::{DEFAULT_TAPPING_TERM_MS, DISABLED_TOKEN, NOOP_TOKEN};
use crate::models::{
    Cell, Combo, EncoderBinding, Keymap, Layer, MacroAction, MacroSlot, TapDance,
};

/// Raw `.vil` document structure (top-level shape only).
#[derive(Debug, Clone, Deserialize)]
pub struct RawVilFile {
    /// Export format version.
    pub version: i64,
    /// Keyboard unique identifier (integer or numeric string).
    pub uid: Value,
    /// Layer → row → cell tokens.
    pub layout: Vec<Vec<Vec<Value>>>,
    /// Layer → encoder index → `[counter-clockwise, clockwise]` pairs.
    #[serde(default)]
    pub encoder_layout: Vec<Vec<Value>>,
    /// Macro slots; each slot is a list of action rows.
    #[serde(default, rename = "macro")]
    pub macros: Vec<Vec<Value>>,
    /// Tap-dance rows: `[tap, hold, double-tap, tap-hold, tapping term]`.
    #[serde(default)]
    pub tap_dance: Vec<Vec<Value>>,
    /// Combo rows: N key tokens followed by one output token.
    #[serde(default)]
    pub combo: Vec<Vec<Value>>,
    /// Firmware settings map.
    #[serde(default)]
    pub settings: BTreeMap<String, Value>,
}

/// Reads and decodes a `.vil` file from disk.
pub fn load_keymap(path: &Path) -> Result<Keymap> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read keymap file: {}", path.display()))?;
    parse_keymap(&content).context(format!("Failed to parse keymap file: {}", path.display()))
}

/// Parses `.vil` JSON text into a decoded keymap.
pub fn parse_keymap(text: &str) -> Result<Keymap> {
    let raw: RawVilFile = serde_json::from_str(text).context("Not a valid Vial export")?;
    Ok(decode(&raw))
}

/// Normalizes a raw export into a [`Keymap`] snapshot.
///
/// Total over its input: malformed sub-elements degrade to empty/default
/// values, never to an error, and slot indices always equal the slot's
/// position in the source so keycode cross-references (`TD(n)`, `M(n)`,
/// layer numbers) stay valid.
#[must_use]
pub fn decode(raw: &RawVilFile) -> Keymap {
    Keymap {
        version: raw.version,
        uid: token_string(&raw.uid),
        layers: decode_layers(&raw.layout),
        encoders: decode_encoders(&raw.encoder_layout),
        macros: decode_macros(&raw.macros),
        tap_dances: decode_tap_dances(&raw.tap_dance),
        combos: decode_combos(&raw.combo),
        settings: decode_settings(&raw.settings),
    }
}

/// Coerces a raw leaf value to its token string.
///
/// Strings pass through; integers become their decimal form; anything else
/// falls back to its JSON rendering.
fn token_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Classifies one layout cell and normalizes its token.
///
/// A cell is empty iff it is the integer −1, the no-op sentinel, or the
/// disabled-position sentinel. Classification happens on the raw value;
/// resolution of non-empty tokens is the resolver's job.
fn cell_from_value(value: &Value) -> Cell {
    let is_empty = value.as_i64() == Some(-1)
        || value.as_str() == Some(NOOP_TOKEN)
        || value.as_str() == Some(DISABLED_TOKEN);
    Cell::new(token_string(value), is_empty)
}

fn decode_layers(layout: &[Vec<Vec<Value>>]) -> Vec<Layer> {
    layout
        .iter()
        .enumerate()
        .map(|(index, rows)| Layer {
            index,
            rows: rows
                .iter()
                .map(|row| row.iter().map(cell_from_value).collect())
                .collect(),
        })
        .collect()
}

fn decode_encoders(encoder_layout: &[Vec<Value>]) -> Vec<EncoderBinding> {
    let mut encoders = Vec::new();
    for (layer, layer_encoders) in encoder_layout.iter().enumerate() {
        for (encoder_index, entry) in layer_encoders.iter().enumerate() {
            // Only well-formed [ccw, cw] pairs become bindings.
            if let Some(pair) = entry.as_array() {
                if pair.len() >= 2 {
                    encoders.push(EncoderBinding {
                        layer,
                        encoder_index,
                        counter_clockwise: token_string(&pair[0]),
                        clockwise: token_string(&pair[1]),
                    });
                }
            }
        }
    }
    encoders
}

fn decode_macros(macros: &[Vec<Value>]) -> Vec<MacroSlot> {
    macros
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let actions: Vec<MacroAction> = slot
                .iter()
                .filter_map(|row| row.as_array())
                .filter(|row| row.len() >= 2)
                .map(|row| MacroAction {
                    kind: token_string(&row[0]),
                    tokens: row[1..].iter().map(token_string).collect(),
                })
                .collect();
            let is_empty = actions.is_empty();
            MacroSlot {
                index,
                actions,
                is_empty,
            }
        })
        .collect()
}

/// "Unset" for tap-dance emptiness: absent, null/false/zero, the empty
/// string, or the no-op sentinel.
fn is_unset_action(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_i64() == Some(0),
        Some(Value::String(s)) => s.is_empty() || s == NOOP_TOKEN,
        Some(_) => false,
    }
}

fn decode_tap_dances(tap_dance: &[Vec<Value>]) -> Vec<TapDance> {
    tap_dance
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let is_empty = (0..4).all(|i| is_unset_action(row.get(i)));
            let action = |i: usize| -> String {
                row.get(i)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            TapDance {
                index,
                tap: action(0),
                hold: action(1),
                double_tap: action(2),
                tap_hold: action(3),
                tapping_term_ms: row
                    .get(4)
                    .and_then(Value::as_u64)
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or(DEFAULT_TAPPING_TERM_MS),
                is_empty,
            }
        })
        .collect()
}

fn decode_combos(combo: &[Vec<Value>]) -> Vec<Combo> {
    combo
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let (keys, output) = match row.split_last() {
                Some((last, rest)) => {
                    let keys: Vec<String> = rest
                        .iter()
                        .filter_map(Value::as_str)
                        .filter(|k| *k != NOOP_TOKEN)
                        .map(str::to_string)
                        .collect();
                    let output = if last.as_str() == Some(NOOP_TOKEN) {
                        String::new()
                    } else {
                        token_string(last)
                    };
                    (keys, output)
                }
                None => (Vec::new(), String::new()),
            };
            let is_empty = keys.is_empty() || output.is_empty();
            Combo {
                index,
                keys,
                output,
                is_empty,
            }
        })
        .collect()
}

fn decode_settings(settings: &BTreeMap<String, Value>) -> BTreeMap<String, i64> {
    settings
        .iter()
        .filter_map(|(name, value)| value.as_i64().map(|v| (name.clone(), v)))
        .collect()
}
