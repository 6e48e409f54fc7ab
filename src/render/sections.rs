//! Plain-text listings for the non-grid keymap sections.
//!
//! One generator per section: metadata summary, encoder bindings, macros,
//! tap dances, combos, and settings. The `include_empty` switches control
//! whether unconfigured slots appear; the human-readable view hides them,
//! the structured listing shows every slot.

use std::fmt::Write as _;

use regex::Regex;

use crate::keycodes::{compact_label, KeymapLayout};
use crate::models::{EncoderBinding, Keymap, MacroAction, TapDance};

/// Placeholder shown for an unassigned action slot.
const UNSET: &str = "-";

/// One-line-per-field summary of the keymap's metadata and section counts.
#[must_use]
pub fn meta_summary(keymap: &Keymap) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Version: {}", keymap.version);
    let _ = writeln!(output, "UID: {}", keymap.uid);
    let _ = writeln!(output, "Layers: {}", keymap.layers.len());
    if let Some(first) = keymap.layers.first() {
        let cols = first.rows.iter().map(Vec::len).max().unwrap_or(0);
        let _ = writeln!(output, "Matrix: {} rows x {} cols", first.rows.len(), cols);
    }
    let _ = writeln!(output, "Encoders: {}", keymap.encoders.len());
    let _ = writeln!(
        output,
        "Macros: {} defined / {} slots",
        keymap.defined_macros().count(),
        keymap.macros.len()
    );
    let _ = writeln!(
        output,
        "Tap dances: {} defined / {} entries",
        keymap.defined_tap_dances().count(),
        keymap.tap_dances.len()
    );
    let _ = writeln!(
        output,
        "Combos: {} defined / {} slots",
        keymap.defined_combos().count(),
        keymap.combos.len()
    );
    let _ = writeln!(output, "Settings: {} options", keymap.settings.len());
    output
}

/// One encoder binding as `Encoder <i>: CCW <label>  CW <label>`.
#[must_use]
pub fn encoder_line(
    binding: &EncoderBinding,
    layout: KeymapLayout,
    tap_dances: &[TapDance],
) -> String {
    let ccw = action_label(&binding.counter_clockwise, layout, tap_dances);
    let cw = action_label(&binding.clockwise, layout, tap_dances);
    format!("Encoder {}: CCW {}  CW {}", binding.encoder_index, ccw, cw)
}

/// All encoder bindings, grouped under `Layer <n>:` headers.
#[must_use]
pub fn encoder_lines(keymap: &Keymap, layout: KeymapLayout) -> String {
    let mut output = String::new();
    for layer in &keymap.layers {
        let bindings: Vec<&EncoderBinding> = keymap.encoders_for_layer(layer.index).collect();
        if bindings.is_empty() {
            continue;
        }
        let _ = writeln!(output, "Layer {}:", layer.index);
        for binding in bindings {
            let _ = writeln!(
                output,
                "  {}",
                encoder_line(binding, layout, &keymap.tap_dances)
            );
        }
    }
    output
}

/// Macro slots, one `M<i>:` header per slot and one line per action.
#[must_use]
pub fn macro_lines(keymap: &Keymap, layout: KeymapLayout, include_empty: bool) -> String {
    let mut output = String::new();
    for slot in &keymap.macros {
        if slot.is_empty {
            if include_empty {
                let _ = writeln!(output, "M{}: (empty)", slot.index);
            }
            continue;
        }
        let _ = writeln!(output, "M{}:", slot.index);
        for action in &slot.actions {
            let _ = writeln!(output, "  {}", macro_action_text(action, layout));
        }
    }
    output
}

/// One macro action as `<kind>(<args>)`.
///
/// Key-press kinds resolve their tokens through the keycode tables; text and
/// delay payloads are literal data and pass through untouched.
fn macro_action_text(action: &MacroAction, layout: KeymapLayout) -> String {
    let args: Vec<String> = match action.kind.as_str() {
        "tap" | "down" | "up" => action
            .tokens
            .iter()
            .map(|token| compact_label(token, layout, &[]))
            .collect(),
        _ => action.tokens.clone(),
    };
    format!("{}({})", action.kind, args.join(", "))
}

/// Tap-dance entries, one line each with the configured slots and the term.
#[must_use]
pub fn tap_dance_lines(keymap: &Keymap, layout: KeymapLayout, include_empty: bool) -> String {
    let mut output = String::new();
    for td in &keymap.tap_dances {
        if td.is_empty {
            if include_empty {
                let _ = writeln!(output, "TD{}: (empty)", td.index);
            }
            continue;
        }
        let _ = writeln!(
            output,
            "TD{}: tap={}  hold={}  double-tap={}  tap-hold={}  term={}ms",
            td.index,
            action_label(&td.tap, layout, &keymap.tap_dances),
            action_label(&td.hold, layout, &keymap.tap_dances),
            action_label(&td.double_tap, layout, &keymap.tap_dances),
            action_label(&td.tap_hold, layout, &keymap.tap_dances),
            td.tapping_term_ms
        );
    }
    output
}

/// Combo slots as `C<i>: <key> + <key> → <output>`.
#[must_use]
pub fn combo_lines(keymap: &Keymap, layout: KeymapLayout, include_empty: bool) -> String {
    let mut output = String::new();
    for combo in &keymap.combos {
        if combo.is_empty {
            if include_empty {
                let _ = writeln!(output, "C{}: (empty)", combo.index);
            }
            continue;
        }
        let keys: Vec<String> = combo
            .keys
            .iter()
            .map(|key| action_label(key, layout, &keymap.tap_dances))
            .collect();
        let output_label = action_label(&combo.output, layout, &keymap.tap_dances);
        let _ = writeln!(
            output,
            "C{}: {} → {}",
            combo.index,
            keys.join(" + "),
            output_label
        );
    }
    output
}

/// Settings as sorted `<name> = <value>` lines, optionally filtered by name.
#[must_use]
pub fn settings_lines(keymap: &Keymap, filter: Option<&Regex>) -> String {
    let mut output = String::new();
    for (name, value) in &keymap.settings {
        if let Some(filter) = filter {
            if !filter.is_match(name) {
                continue;
            }
        }
        let _ = writeln!(output, "{name} = {value}");
    }
    output
}

/// Resolves an action token for a listing, substituting `-` for empty slots.
fn action_label(token: &str, layout: KeymapLayout, tap_dances: &[TapDance]) -> String {
    let label = compact_label(token, layout, tap_dances);
    if label.is_empty() {
        UNSET.to_string()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, Combo, Layer, MacroSlot};

    fn sample_keymap() -> Keymap {
        Keymap {
            version: 6,
            uid: "123456789".to_string(),
            layers: vec![Layer {
                index: 0,
                rows: vec![vec![Cell::new("KC_A", false), Cell::new("KC_NO", true)]],
            }],
            encoders: vec![EncoderBinding {
                layer: 0,
                encoder_index: 0,
                counter_clockwise: "KC_VOLD".to_string(),
                clockwise: "KC_VOLU".to_string(),
            }],
            macros: vec![
                MacroSlot {
                    index: 0,
                    actions: vec![
                        MacroAction {
                            kind: "text".to_string(),
                            tokens: vec!["hello".to_string()],
                        },
                        MacroAction {
                            kind: "tap".to_string(),
                            tokens: vec!["KC_LCTL".to_string(), "KC_C".to_string()],
                        },
                    ],
                    is_empty: false,
                },
                MacroSlot {
                    index: 1,
                    actions: vec![],
                    is_empty: true,
                },
            ],
            tap_dances: vec![TapDance {
                index: 0,
                tap: "KC_A".to_string(),
                hold: "KC_NO".to_string(),
                double_tap: "KC_B".to_string(),
                tap_hold: "KC_NO".to_string(),
                tapping_term_ms: 200,
                is_empty: false,
            }],
            combos: vec![
                Combo {
                    index: 0,
                    keys: vec!["KC_A".to_string(), "KC_S".to_string()],
                    output: "KC_ESC".to_string(),
                    is_empty: false,
                },
                Combo {
                    index: 1,
                    keys: vec![],
                    output: String::new(),
                    is_empty: true,
                },
            ],
            settings: [("combo_term".to_string(), 50), ("grave_esc".to_string(), 1)]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn test_meta_summary_counts() {
        let summary = meta_summary(&sample_keymap());
        assert!(summary.contains("Version: 6"));
        assert!(summary.contains("UID: 123456789"));
        assert!(summary.contains("Layers: 1"));
        assert!(summary.contains("Matrix: 1 rows x 2 cols"));
        assert!(summary.contains("Macros: 1 defined / 2 slots"));
        assert!(summary.contains("Tap dances: 1 defined / 1 entries"));
        assert!(summary.contains("Combos: 1 defined / 2 slots"));
        assert!(summary.contains("Settings: 2 options"));
    }

    #[test]
    fn test_encoder_line_labels() {
        let keymap = sample_keymap();
        let line = encoder_line(&keymap.encoders[0], KeymapLayout::Us, &keymap.tap_dances);
        assert_eq!(line, "Encoder 0: CCW Vol-  CW Vol+");
    }

    #[test]
    fn test_encoder_lines_grouped_by_layer() {
        let listing = encoder_lines(&sample_keymap(), KeymapLayout::Us);
        assert_eq!(listing, "Layer 0:\n  Encoder 0: CCW Vol-  CW Vol+\n");
    }

    #[test]
    fn test_macro_lines_resolve_key_actions_only() {
        let listing = macro_lines(&sample_keymap(), KeymapLayout::Us, false);
        assert_eq!(listing, "M0:\n  text(hello)\n  tap(LCtrl, C)\n");
    }

    #[test]
    fn test_macro_lines_include_empty_slots() {
        let listing = macro_lines(&sample_keymap(), KeymapLayout::Us, true);
        assert!(listing.contains("M1: (empty)"));
    }

    #[test]
    fn test_macro_text_payload_is_not_resolved() {
        // A numeric text payload must stay literal, not become a hex label.
        let action = MacroAction {
            kind: "text".to_string(),
            tokens: vec!["92".to_string()],
        };
        assert_eq!(macro_action_text(&action, KeymapLayout::Us), "text(92)");

        let action = MacroAction {
            kind: "delay".to_string(),
            tokens: vec!["500".to_string()],
        };
        assert_eq!(macro_action_text(&action, KeymapLayout::Us), "delay(500)");
    }

    #[test]
    fn test_tap_dance_lines_mark_unset_slots() {
        let listing = tap_dance_lines(&sample_keymap(), KeymapLayout::Us, false);
        assert_eq!(
            listing,
            "TD0: tap=A  hold=-  double-tap=B  tap-hold=-  term=200ms\n"
        );
    }

    #[test]
    fn test_combo_lines_format() {
        let listing = combo_lines(&sample_keymap(), KeymapLayout::Us, false);
        assert_eq!(listing, "C0: A + S → Esc\n");

        let listing = combo_lines(&sample_keymap(), KeymapLayout::Us, true);
        assert!(listing.contains("C1: (empty)"));
    }

    #[test]
    fn test_settings_lines_sorted_and_filtered() {
        let keymap = sample_keymap();
        assert_eq!(
            settings_lines(&keymap, None),
            "combo_term = 50\ngrave_esc = 1\n"
        );

        let filter = Regex::new("^combo").unwrap();
        assert_eq!(settings_lines(&keymap, Some(&filter)), "combo_term = 50\n");
    }

    #[test]
    fn test_listings_are_layout_aware() {
        let mut keymap = sample_keymap();
        keymap.combos[0].keys = vec!["KC_QUOTE".to_string()];
        keymap.combos[0].output = "KC_QUOTE".to_string();
        let us = combo_lines(&keymap, KeymapLayout::Us, false);
        let jis = combo_lines(&keymap, KeymapLayout::Jis, false);
        assert_eq!(us, "C0: ' → '\n");
        assert_eq!(jis, "C0: : → :\n");
    }
}
