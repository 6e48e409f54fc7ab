//! Keycode token resolution.
//!
//! Turns one raw token into a structured display label. The grammar is a
//! fixed priority list of productions; the first matching production wins.
//! Order matters for correctness, not speed: several token shapes are
//! ambiguous under multiple productions (`MO(1)` also looks like a modifier
//! wrapper, `LSFT_T(KC_A)` also looks like `LSFT_T(...)` wrapping), so the
//! more specific forms are always tried first.
//!
//! Resolution never fails. A token that matches nothing renders as itself
//! with the `KC_` prefix stripped.

use std::fmt;

use serde::Serialize;

use super::tables;
use super::KeymapLayout;
use crate::constants::{DISABLED_TOKEN, NOOP_TOKEN};
use crate::models::TapDance;

/// Semantic category of a resolved token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyCategory {
    /// Plain printable or function key.
    Normal,
    /// Modifier, alone or composed with an inner key.
    Modifier,
    /// Changes the active layer (momentary, toggle, one-shot, layer-tap...).
    LayerSwitch,
    /// Macro reference.
    Macro,
    /// Tap-dance reference.
    TapDance,
    /// Device-control action (`USER<n>`).
    Special,
    /// Nothing assigned at this position.
    Empty,
}

impl fmt::Display for KeyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Modifier => "modifier",
            Self::LayerSwitch => "layerSwitch",
            Self::Macro => "macro",
            Self::TapDance => "tapDance",
            Self::Special => "special",
            Self::Empty => "empty",
        };
        write!(f, "{name}")
    }
}

/// Structured display form of one resolved token.
///
/// - `label`: the main text shown on the key.
/// - `sub_label`: qualifier (layer-switch kind, tap key of a mod-tap,
///   shifted glyph of the inner key...).
/// - `secondary_label`: the inner key's own label when the sub-label slot is
///   already taken by the inner key's shifted glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedToken {
    /// Main display text.
    pub label: String,
    /// Qualifier text, when the token carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_label: Option<String>,
    /// Inner-key label displaced out of the sub-label slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_label: Option<String>,
    /// Semantic category.
    pub category: KeyCategory,
}

impl ParsedToken {
    fn empty() -> Self {
        Self {
            label: String::new(),
            sub_label: None,
            secondary_label: None,
            category: KeyCategory::Empty,
        }
    }

    fn normal(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sub_label: None,
            secondary_label: None,
            category: KeyCategory::Normal,
        }
    }

    /// Compact one-line rendering.
    ///
    /// Layer-switch, tap-dance, and macro tokens show their qualifier in
    /// parentheses (`1(MO)`, `A B(TD0)`, `2(M)`); everything else shows the
    /// label alone.
    #[must_use]
    pub fn compact_text(&self) -> String {
        if let Some(sub) = &self.sub_label {
            if !sub.is_empty()
                && matches!(
                    self.category,
                    KeyCategory::LayerSwitch | KeyCategory::TapDance | KeyCategory::Macro
                )
            {
                return format!("{}({})", self.label, sub);
            }
        }
        self.label.clone()
    }
}

/// Resolves one raw token into its display form.
///
/// Integer cell tokens reach this function in the decimal string form the
/// decoder normalized them to: −1 classifies as empty, any other integer
/// renders as an uppercase hex literal. `tap_dances` is only consulted for
/// `TD(n)` tokens; pass an empty slice when no keymap context exists.
#[must_use]
pub fn resolve(code: &str, layout: KeymapLayout, tap_dances: &[TapDance]) -> ParsedToken {
    // 1. Nothing assigned / position absent.
    if code == NOOP_TOKEN || code == DISABLED_TOKEN {
        return ParsedToken::empty();
    }
    // 2. Integer-origin token: -1 is empty, the rest display as raw hex.
    if let Some(value) = integer_token(code) {
        if value == -1 {
            return ParsedToken::empty();
        }
        return ParsedToken::normal(hex_label(value));
    }
    // 3. Transparent: falls through to the next active layer below.
    if code == "KC_TRNS" || code == "KC_TRANSPARENT" || code == "_______" {
        return ParsedToken::normal("▽");
    }

    // 4. Plain layer-switch forms: MO(n), TG(n), TO(n), TT(n), OSL(n), DF(n).
    for form in LAYER_SWITCH_FORMS {
        if let Some(rest) = code.strip_prefix(form) {
            if let Some(layer) = rest.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
                if is_digits(layer) {
                    return ParsedToken {
                        label: layer.to_string(),
                        sub_label: Some((*form).to_string()),
                        secondary_label: None,
                        category: KeyCategory::LayerSwitch,
                    };
                }
            }
        }
    }

    // 5. Layer-tap: LT<n>(inner). Only the inner key's primary label
    // surfaces; its own sublabel is discarded.
    if let Some(rest) = code.strip_prefix("LT") {
        if let Some((digits, inner)) = rest.split_once('(') {
            if is_digits(digits) {
                if let Some(inner) = inner.strip_suffix(')') {
                    if !inner.is_empty() {
                        let tap = resolve(inner, layout, &[]);
                        return ParsedToken {
                            label: tap.label,
                            sub_label: Some(format!("LT{digits}")),
                            secondary_label: None,
                            category: KeyCategory::LayerSwitch,
                        };
                    }
                }
            }
        }
    }

    // 6. Tap-dance reference: TD(n) or TDn.
    if let Some(rest) = code.strip_prefix("TD") {
        let digits = rest
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(rest);
        if is_digits(digits) {
            return tap_dance_label(digits, layout, tap_dances);
        }
    }

    // 7. Macro reference: M(n) or Mn.
    if let Some(rest) = code.strip_prefix('M') {
        let digits = rest
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(rest);
        if is_digits(digits) {
            return ParsedToken {
                label: digits.to_string(),
                sub_label: Some("M".to_string()),
                secondary_label: None,
                category: KeyCategory::Macro,
            };
        }
    }

    // 8. Device-control action: USER<n>.
    if let Some(digits) = code.strip_prefix("USER") {
        if is_digits(digits) {
            let label = digits
                .parse::<usize>()
                .ok()
                .and_then(tables::user_action_label)
                .map_or_else(|| format!("User{digits}"), str::to_string);
            return ParsedToken {
                label,
                sub_label: None,
                secondary_label: None,
                category: KeyCategory::Special,
            };
        }
    }

    if let Some((head, inner)) = split_wrapper(code) {
        if is_modifier_ident(head) {
            // 9. Mod-tap: <MOD>_T(inner).
            if let Some(mod_ident) = head.strip_suffix("_T") {
                if !mod_ident.is_empty() {
                    let name = tables::modifier_label(mod_ident).unwrap_or(mod_ident);
                    return compose_modifier(name, resolve(inner, layout, &[]));
                }
            }

            // 10. Modifier-wrapped key: <MOD>(inner). Shift wrapping a key
            // with a shifted glyph short-circuits to that glyph; only the
            // three shift spellings below do this.
            let name = tables::modifier_label(head);
            if name.is_some() && matches!(head, "LSFT" | "RSFT" | "S") {
                if let Some(glyph) = tables::shifted_glyph(inner, layout) {
                    return ParsedToken::normal(glyph);
                }
            }
            return compose_modifier(name.unwrap_or(head), resolve(inner, layout, &[]));
        }
    }

    // 11. A modifier held on its own.
    if tables::is_bare_modifier(code) {
        let label = tables::label_entry(code, layout).map_or(code, |(label, _)| label);
        return ParsedToken {
            label: label.to_string(),
            sub_label: None,
            secondary_label: None,
            category: KeyCategory::Modifier,
        };
    }

    // 12. Simple keycode table, else the literal token without its prefix.
    if let Some((label, sub_label)) = tables::label_entry(code, layout) {
        return ParsedToken {
            label: label.to_string(),
            sub_label: sub_label.map(str::to_string),
            secondary_label: None,
            category: KeyCategory::Normal,
        };
    }
    ParsedToken::normal(code.strip_prefix("KC_").unwrap_or(code))
}

/// Resolves a token and renders it in compact one-line form.
#[must_use]
pub fn compact_label(code: &str, layout: KeymapLayout, tap_dances: &[TapDance]) -> String {
    resolve(code, layout, tap_dances).compact_text()
}

const LAYER_SWITCH_FORMS: &[&str] = &["MO", "TG", "TO", "TT", "OSL", "DF"];

/// Builds the modifier-composed result shared by productions 9 and 10.
///
/// When the inner key has its own sublabel (a shifted glyph), that sublabel
/// wins the sub-label slot and the inner label moves to `secondary_label`.
fn compose_modifier(name: &str, inner: ParsedToken) -> ParsedToken {
    match inner.sub_label {
        Some(sub) => ParsedToken {
            label: name.to_string(),
            sub_label: Some(sub),
            secondary_label: Some(inner.label),
            category: KeyCategory::Modifier,
        },
        None => ParsedToken {
            label: name.to_string(),
            sub_label: Some(inner.label),
            secondary_label: None,
            category: KeyCategory::Modifier,
        },
    }
}

/// Label rule for `TD(n)`.
///
/// A tap-dance entry gets a readable two-key label only when tap and
/// double-tap are the whole story: both set, different from each other, and
/// hold/tap-hold either unset or mirroring tap (Vial fills them with the tap
/// key when not configured). Both keys must also resolve to plain `normal`
/// keycodes. Everything else keeps the indexed `n(TD)` form.
fn tap_dance_label(digits: &str, layout: KeymapLayout, tap_dances: &[TapDance]) -> ParsedToken {
    let fallback = || ParsedToken {
        label: digits.to_string(),
        sub_label: Some("TD".to_string()),
        secondary_label: None,
        category: KeyCategory::TapDance,
    };

    let entry = digits
        .parse::<usize>()
        .ok()
        .and_then(|index| tap_dances.iter().find(|td| td.index == index));
    let Some(entry) = entry else {
        return fallback();
    };
    if !is_only_tap_and_double_tap(entry) {
        return fallback();
    }

    // Nested tap-dance references are not supported, so the inner tokens
    // resolve without tap-dance context (which also keeps a self-referential
    // entry from recursing).
    let tap = resolve(&entry.tap, layout, &[]);
    let double_tap = resolve(&entry.double_tap, layout, &[]);
    if tap.category != KeyCategory::Normal || double_tap.category != KeyCategory::Normal {
        return fallback();
    }

    ParsedToken {
        label: format!("{} {}", tap.label, double_tap.label),
        sub_label: Some(format!("TD{digits}")),
        secondary_label: None,
        category: KeyCategory::TapDance,
    }
}

/// True when only tap and double-tap are meaningfully configured.
fn is_only_tap_and_double_tap(td: &TapDance) -> bool {
    if !is_configured(&td.tap) || !is_configured(&td.double_tap) {
        return false;
    }
    if td.tap == td.double_tap {
        return false;
    }
    // A hold equal to tap means "not configured": Vial mirrors the tap key
    // into unconfigured slots. Anything else is a real hold action.
    if is_configured(&td.hold) && td.hold != td.tap {
        return false;
    }
    if is_configured(&td.tap_hold) && td.tap_hold != td.tap {
        return false;
    }
    true
}

fn is_configured(action: &str) -> bool {
    !action.is_empty() && action != NOOP_TOKEN
}

/// Recognizes a token that is wholly an integer literal.
fn integer_token(code: &str) -> Option<i64> {
    let digits = code.strip_prefix('-').unwrap_or(code);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    code.parse().ok()
}

fn hex_label(value: i64) -> String {
    if value < 0 {
        format!("0x-{:X}", value.unsigned_abs())
    } else {
        format!("0x{value:X}")
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A modifier identifier is uppercase letters and underscores only.
fn is_modifier_ident(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_uppercase() || b == b'_')
}

/// Splits `HEAD(inner)` at the first parenthesis, requiring a trailing `)`
/// and a non-empty head and inner.
fn split_wrapper(code: &str) -> Option<(&str, &str)> {
    let open = code.find('(')?;
    let head = &code[..open];
    let inner = code[open + 1..].strip_suffix(')')?;
    if head.is_empty() || inner.is_empty() {
        return None;
    }
    Some((head, inner))
}
