//! Decoded keymap data structures.
//!
//! These types are the normalized, strongly-typed form of a Vial `.vil`
//! export. They are produced once per loaded file by the parser and are
//! immutable snapshots thereafter: every field is plain data, cheap to
//! clone, and safe to share between render passes.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single key position on one layer.
///
/// The token is kept verbatim (integers from the export are normalized to
/// their decimal string form); semantic interpretation is deferred to the
/// keycode resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Raw keycode token, e.g. "`KC_A`", "`LT2(KC_SPC)`", "`-1`".
    pub token: String,
    /// True when the token denotes "no key assigned" or "position absent".
    pub is_empty: bool,
}

impl Cell {
    /// Creates a cell from a raw token and its emptiness classification.
    pub fn new(token: impl Into<String>, is_empty: bool) -> Self {
        Self {
            token: token.into(),
            is_empty,
        }
    }
}

/// One keymap layer: the export's row/column shape, preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Position of this layer in the export (stable identifier; layer-switch
    /// keycodes refer to it).
    pub index: usize,
    /// Rows of cells. Row lengths are whatever the export contained; no
    /// rectangularity is assumed.
    pub rows: Vec<Vec<Cell>>,
}

/// One rotary encoder binding on one layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncoderBinding {
    /// Layer this binding belongs to.
    pub layer: usize,
    /// Encoder position within the layer.
    pub encoder_index: usize,
    /// Token sent on counter-clockwise rotation.
    pub counter_clockwise: String,
    /// Token sent on clockwise rotation.
    pub clockwise: String,
}

/// One action row inside a macro: an action kind plus its key tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroAction {
    /// Action kind as written in the export (e.g. "tap", "down", "up").
    pub kind: String,
    /// Key tokens the action applies to.
    pub tokens: Vec<String>,
}

/// One macro slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSlot {
    /// Slot position in the export; `M(n)` keycodes refer to it.
    pub index: usize,
    /// Well-formed action rows, in export order.
    pub actions: Vec<MacroAction>,
    /// True when no well-formed action rows exist for this slot.
    pub is_empty: bool,
}

/// One tap-dance definition: up to four actions on a single physical key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TapDance {
    /// Slot position in the export; `TD(n)` keycodes refer to it.
    pub index: usize,
    /// Token sent on a single tap.
    pub tap: String,
    /// Token sent on hold.
    pub hold: String,
    /// Token sent on a double tap.
    pub double_tap: String,
    /// Token sent on tap-then-hold.
    pub tap_hold: String,
    /// Tapping term in milliseconds.
    pub tapping_term_ms: u32,
    /// True when all four action fields are absent or the no-op token.
    pub is_empty: bool,
}

/// One combo: several keys chorded together producing a single output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Combo {
    /// Slot position in the export.
    pub index: usize,
    /// Input key tokens (no-op and malformed entries already dropped).
    pub keys: Vec<String>,
    /// Output token; empty string when the export had no usable output.
    pub output: String,
    /// True when the combo has no keys or no output.
    pub is_empty: bool,
}

/// The full decoded keymap snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Keymap {
    /// Export format version.
    pub version: i64,
    /// Keyboard unique identifier, coerced to string.
    pub uid: String,
    /// All layers, in export order.
    pub layers: Vec<Layer>,
    /// All well-formed encoder bindings across all layers.
    pub encoders: Vec<EncoderBinding>,
    /// All macro slots, including empty ones.
    pub macros: Vec<MacroSlot>,
    /// All tap-dance slots, including empty ones.
    pub tap_dances: Vec<TapDance>,
    /// All combo slots, including empty ones.
    pub combos: Vec<Combo>,
    /// Firmware settings map, keyed by option name.
    pub settings: BTreeMap<String, i64>,
}

impl Keymap {
    /// Macro slots that actually contain actions.
    pub fn defined_macros(&self) -> impl Iterator<Item = &MacroSlot> {
        self.macros.iter().filter(|m| !m.is_empty)
    }

    /// Tap-dance slots with at least one configured action.
    pub fn defined_tap_dances(&self) -> impl Iterator<Item = &TapDance> {
        self.tap_dances.iter().filter(|td| !td.is_empty)
    }

    /// Combos with both keys and an output.
    pub fn defined_combos(&self) -> impl Iterator<Item = &Combo> {
        self.combos.iter().filter(|c| !c.is_empty)
    }

    /// Encoder bindings belonging to the given layer.
    pub fn encoders_for_layer(&self, layer: usize) -> impl Iterator<Item = &EncoderBinding> {
        self.encoders.iter().filter(move |e| e.layer == layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_keymap() -> Keymap {
        Keymap {
            version: 1,
            uid: "12345".to_string(),
            layers: vec![Layer {
                index: 0,
                rows: vec![vec![Cell::new("KC_A", false), Cell::new("KC_NO", true)]],
            }],
            encoders: vec![
                EncoderBinding {
                    layer: 0,
                    encoder_index: 0,
                    counter_clockwise: "KC_VOLD".to_string(),
                    clockwise: "KC_VOLU".to_string(),
                },
                EncoderBinding {
                    layer: 1,
                    encoder_index: 0,
                    counter_clockwise: "KC_LEFT".to_string(),
                    clockwise: "KC_RGHT".to_string(),
                },
            ],
            macros: vec![
                MacroSlot {
                    index: 0,
                    actions: vec![MacroAction {
                        kind: "tap".to_string(),
                        tokens: vec!["KC_H".to_string(), "KC_I".to_string()],
                    }],
                    is_empty: false,
                },
                MacroSlot {
                    index: 1,
                    actions: Vec::new(),
                    is_empty: true,
                },
            ],
            tap_dances: vec![TapDance {
                index: 0,
                tap: "KC_NO".to_string(),
                hold: "KC_NO".to_string(),
                double_tap: "KC_NO".to_string(),
                tap_hold: "KC_NO".to_string(),
                tapping_term_ms: 200,
                is_empty: true,
            }],
            combos: vec![Combo {
                index: 0,
                keys: Vec::new(),
                output: String::new(),
                is_empty: true,
            }],
            settings: BTreeMap::new(),
        }
    }

    #[test]
    fn test_cell_new() {
        let cell = Cell::new("KC_A", false);
        assert_eq!(cell.token, "KC_A");
        assert!(!cell.is_empty);
    }

    #[test]
    fn test_defined_macros_filters_empty_slots() {
        let keymap = sample_keymap();
        let defined: Vec<_> = keymap.defined_macros().collect();
        assert_eq!(defined.len(), 1);
        assert_eq!(defined[0].index, 0);
    }

    #[test]
    fn test_defined_tap_dances_filters_empty_slots() {
        let keymap = sample_keymap();
        assert_eq!(keymap.defined_tap_dances().count(), 0);
    }

    #[test]
    fn test_defined_combos_filters_empty_slots() {
        let keymap = sample_keymap();
        assert_eq!(keymap.defined_combos().count(), 0);
    }

    #[test]
    fn test_encoders_for_layer() {
        let keymap = sample_keymap();
        let layer0: Vec<_> = keymap.encoders_for_layer(0).collect();
        assert_eq!(layer0.len(), 1);
        assert_eq!(layer0[0].clockwise, "KC_VOLU");
        assert_eq!(keymap.encoders_for_layer(2).count(), 0);
    }
}
