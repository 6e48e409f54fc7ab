//! Keycode lookup tables.
//!
//! Flat token → label tables with a base (US) vocabulary and a JIS override
//! layer. Lookups are linear scans over const slices; the tables are small
//! and resolution happens at render frequency, not in a hot loop.

use super::KeymapLayout;

/// Keycodes that are a modifier held on its own (not composed with anything).
const MODIFIER_KEYS: &[&str] = &[
    "KC_LCTRL", "KC_LSHIFT", "KC_LALT", "KC_LGUI",
    "KC_RCTRL", "KC_RSHIFT", "KC_RALT", "KC_RGUI",
    "KC_LCTL", "KC_LSFT", "KC_RCTL", "KC_RSFT",
];

/// Modifier identifier → short display name.
///
/// Covers left/right forms, the single-letter generic forms, and the
/// precomposed multi-modifier identifiers QMK defines.
const MOD_LABELS: &[(&str, &str)] = &[
    ("LSFT", "LShift"), ("RSFT", "RShift"), ("LCTL", "LCtrl"), ("RCTL", "RCtrl"),
    ("LALT", "LAlt"), ("RALT", "RAlt"), ("LGUI", "LGui"), ("RGUI", "RGui"),
    ("C", "Ctrl"), ("A", "Alt"), ("S", "Shift"), ("G", "Gui"),
    ("LCMD", "LCmd"), ("RCMD", "RCmd"), ("LWIN", "LWin"), ("RWIN", "RWin"),
    ("LOPT", "LOpt"), ("ROPT", "ROpt"),
    ("LCA", "LC+LA"), ("RCA", "RC+RA"), ("LCG", "LC+LG"), ("RCG", "RC+RG"),
    ("LSA", "LS+LA"), ("RSA", "RS+RA"), ("LSG", "LS+LG"), ("RSG", "RS+RG"),
    ("LAG", "LA+LG"), ("RAG", "RA+RG"), ("LCAG", "LC+LA+LG"), ("RCAG", "RC+RA+RG"),
    ("MEH", "C+A+S"), ("HYPR", "C+A+S+G"), ("SGUI", "S+G"), ("SCMD", "S+G"), ("SWIN", "S+G"),
    ("ALL", "Hyper"), ("C_S", "C+S"), ("C_A", "C+A"), ("C_G", "C+G"),
    ("S_A", "S+A"), ("S_G", "S+G"), ("A_G", "A+G"),
    ("C_S_A", "C+S+A"), ("C_S_G", "C+S+G"), ("C_A_G", "C+A+G"), ("S_A_G", "S+A+G"),
    ("C_S_A_G", "C+S+A+G"),
];

/// Shift-produced glyphs on the US layout.
const US_SHIFTED: &[(&str, &str)] = &[
    ("KC_1", "!"), ("KC_2", "@"), ("KC_3", "#"), ("KC_4", "$"), ("KC_5", "%"),
    ("KC_6", "^"), ("KC_7", "&"), ("KC_8", "*"), ("KC_9", "("), ("KC_0", ")"),
    ("KC_MINUS", "_"), ("KC_EQUAL", "+"), ("KC_LBRACKET", "{"), ("KC_RBRACKET", "}"),
    ("KC_BSLASH", "|"), ("KC_SCOLON", ":"), ("KC_QUOTE", "\""), ("KC_GRAVE", "~"),
    ("KC_COMMA", "<"), ("KC_DOT", ">"), ("KC_SLASH", "?"),
];

/// Shift-produced glyphs on the JIS layout.
const JIS_SHIFTED: &[(&str, &str)] = &[
    ("KC_1", "!"), ("KC_2", "\""), ("KC_3", "#"), ("KC_4", "$"), ("KC_5", "%"),
    ("KC_6", "&"), ("KC_7", "'"), ("KC_8", "("), ("KC_9", ")"), ("KC_0", "0"),
    ("KC_MINUS", "="), ("KC_EQUAL", "~"), ("KC_LBRACKET", "`"), ("KC_RBRACKET", "{"),
    ("KC_BSLASH", "}"), ("KC_SCOLON", "+"), ("KC_QUOTE", "*"),
    ("KC_COMMA", "<"), ("KC_DOT", ">"), ("KC_SLASH", "?"),
];

/// JIS label overrides (only where JIS differs from US), including the
/// IME-control keys that have no US counterpart.
const JIS_LABEL_OVERRIDES: &[(&str, &str, Option<&str>)] = &[
    ("KC_1", "1", Some("!")), ("KC_2", "2", Some("\"")),
    ("KC_3", "3", Some("#")), ("KC_4", "4", Some("$")),
    ("KC_5", "5", Some("%")), ("KC_6", "6", Some("&")),
    ("KC_7", "7", Some("'")), ("KC_8", "8", Some("(")),
    ("KC_9", "9", Some(")")), ("KC_0", "0", None),
    ("KC_MINUS", "-", Some("=")), ("KC_EQUAL", "^", Some("~")),
    ("KC_LBRACKET", "@", Some("`")), ("KC_RBRACKET", "[", Some("{")),
    ("KC_BSLASH", "]", Some("}")), ("KC_NONUS_HASH", "]", Some("}")),
    ("KC_SCOLON", ";", Some("+")), ("KC_QUOTE", ":", Some("*")),
    ("KC_GRAVE", "半角", None),
    ("KC_INT1", "\\", Some("_")), ("KC_INT2", "ひら", None),
    ("KC_INT3", "\\", Some("|")), ("KC_INT4", "変換", None), ("KC_INT5", "無変換", None),
    ("KC_LANG1", "かな", None), ("KC_LANG2", "英数", None),
    ("KC_RO", "\\", Some("_")), ("KC_KANA", "ひら", None),
    ("KC_JYEN", "¥", Some("|")), ("KC_HENK", "変換", None), ("KC_MHEN", "無変換", None),
];

/// Base keycode → display label table (US layout), with optional shifted
/// sublabel. Covers the QMK/Vial vocabulary the viewer understands; anything
/// absent falls back to the literal token with the `KC_` prefix stripped.
const BASE_LABELS: &[(&str, &str, Option<&str>)] = &[
    ("KC_A", "A", None), ("KC_B", "B", None), ("KC_C", "C", None), ("KC_D", "D", None),
    ("KC_E", "E", None), ("KC_F", "F", None), ("KC_G", "G", None), ("KC_H", "H", None),
    ("KC_I", "I", None), ("KC_J", "J", None), ("KC_K", "K", None), ("KC_L", "L", None),
    ("KC_M", "M", None), ("KC_N", "N", None), ("KC_O", "O", None), ("KC_P", "P", None),
    ("KC_Q", "Q", None), ("KC_R", "R", None), ("KC_S", "S", None), ("KC_T", "T", None),
    ("KC_U", "U", None), ("KC_V", "V", None), ("KC_W", "W", None), ("KC_X", "X", None),
    ("KC_Y", "Y", None), ("KC_Z", "Z", None),
    ("KC_1", "1", Some("!")), ("KC_2", "2", Some("@")),
    ("KC_3", "3", Some("#")), ("KC_4", "4", Some("$")),
    ("KC_5", "5", Some("%")), ("KC_6", "6", Some("^")),
    ("KC_7", "7", Some("&")), ("KC_8", "8", Some("*")),
    ("KC_9", "9", Some("(")), ("KC_0", "0", Some(")")),
    ("KC_F1", "F1", None), ("KC_F2", "F2", None), ("KC_F3", "F3", None), ("KC_F4", "F4", None),
    ("KC_F5", "F5", None), ("KC_F6", "F6", None), ("KC_F7", "F7", None), ("KC_F8", "F8", None),
    ("KC_F9", "F9", None), ("KC_F10", "F10", None), ("KC_F11", "F11", None), ("KC_F12", "F12", None),
    ("KC_LCTRL", "LCtrl", None), ("KC_LSHIFT", "LShift", None),
    ("KC_LALT", "LAlt", None), ("KC_LGUI", "LGui", None),
    ("KC_RCTRL", "RCtrl", None), ("KC_RSHIFT", "RShift", None),
    ("KC_RALT", "RAlt", None), ("KC_RGUI", "RGui", None),
    ("KC_LCTL", "LCtrl", None), ("KC_LSFT", "LShift", None),
    ("KC_RCTL", "RCtrl", None), ("KC_RSFT", "RShift", None),
    ("KC_ENTER", "Enter", None), ("KC_ESCAPE", "Esc", None),
    ("KC_BSPACE", "Bksp", None), ("KC_BSPC", "Bksp", None),
    ("KC_TAB", "Tab", None), ("KC_SPACE", "Space", None),
    ("KC_MINUS", "-", Some("_")), ("KC_EQUAL", "=", Some("+")),
    ("KC_LBRACKET", "[", Some("{")), ("KC_RBRACKET", "]", Some("}")),
    ("KC_BSLASH", "\\", Some("|")),
    ("KC_NONUS_HASH", "#", Some("~")), ("KC_NUHS", "#", Some("~")),
    ("KC_SCOLON", ";", Some(":")), ("KC_QUOTE", "'", Some("\"")),
    ("KC_GRAVE", "`", Some("~")),
    ("KC_COMMA", ",", Some("<")), ("KC_DOT", ".", Some(">")), ("KC_SLASH", "/", Some("?")),
    ("KC_CAPS", "Caps", None), ("KC_PSCR", "PrtSc", None),
    ("KC_SLCK", "ScrLk", None), ("KC_PAUSE", "Pause", None),
    ("KC_INS", "Ins", None), ("KC_HOME", "Home", None), ("KC_PGUP", "PgUp", None),
    ("KC_DEL", "Del", None), ("KC_END", "End", None), ("KC_PGDN", "PgDn", None),
    ("KC_RIGHT", "→", None), ("KC_RGHT", "→", None), ("KC_LEFT", "←", None),
    ("KC_DOWN", "↓", None), ("KC_UP", "↑", None),
    ("KC_NLCK", "NumLk", None),
    ("KC_KP_SLASH", "/", None), ("KC_KP_ASTERISK", "*", None),
    ("KC_KP_MINUS", "-", None), ("KC_KP_PLUS", "+", None),
    ("KC_KP_ENTER", "Enter", None),
    ("KC_KP_1", "1", None), ("KC_KP_2", "2", None), ("KC_KP_3", "3", None),
    ("KC_KP_4", "4", None), ("KC_KP_5", "5", None), ("KC_KP_6", "6", None),
    ("KC_KP_7", "7", None), ("KC_KP_8", "8", None), ("KC_KP_9", "9", None),
    ("KC_KP_0", "0", None), ("KC_KP_DOT", ".", None),
    ("KC_KP_EQUAL", "=", None), ("KC_PEQL", "=", None),
    ("KC_MUTE", "Mute", None), ("KC_VOLU", "Vol+", None), ("KC_VOLD", "Vol-", None),
    ("KC_WH_U", "WhlUp", None), ("KC_WH_D", "WhlDn", None),
    ("KC_WH_L", "WhlL", None), ("KC_WH_R", "WhlR", None),
    ("KC_NO", "", None), ("KC_TRNS", "▽", None), ("KC_TRANSPARENT", "▽", None),
    ("XXXXXXX", "", None), ("_______", "▽", None),
    ("KC_ENT", "Enter", None), ("KC_ESC", "Esc", None), ("KC_SPC", "Space", None),
    ("KC_MINS", "-", Some("_")), ("KC_EQL", "=", Some("+")),
    ("KC_LBRC", "[", Some("{")), ("KC_RBRC", "]", Some("}")), ("KC_BSLS", "\\", Some("|")),
    ("KC_SCLN", ";", Some(":")), ("KC_QUOT", "'", Some("\"")), ("KC_GRV", "`", Some("~")),
    ("KC_COMM", ",", Some("<")), ("KC_SLSH", "/", Some("?")),
    ("KC_JYEN", "¥", Some("|")), ("KC_LANG1", "LANG1", None), ("KC_LANG2", "LANG2", None),
    ("KC_BTN1", "Mouse1", None), ("KC_BTN2", "Mouse2", None), ("KC_BTN3", "Mouse3", None),
    ("QK_BOOT", "Boot", None), ("EE_CLR", "EE_CLR", None),
];

/// Labels for the `USER<n>` device-control actions (Bluetooth profile
/// management and output switching), indexed by `n`.
const USER_ACTIONS: &[&str] = &[
    "BT0", "BT1", "BT2", "NextBT", "PrevBT", "ClearBT", "SwitchOut", "ClearPeer",
];

/// Looks up a simple keycode's `(label, shifted sublabel)` for the layout.
///
/// JIS tries its override table first, then falls through to the base table.
pub(super) fn label_entry(
    code: &str,
    layout: KeymapLayout,
) -> Option<(&'static str, Option<&'static str>)> {
    if layout == KeymapLayout::Jis {
        if let Some(hit) = find_labeled(JIS_LABEL_OVERRIDES, code) {
            return Some(hit);
        }
    }
    find_labeled(BASE_LABELS, code)
}

fn find_labeled(
    table: &'static [(&'static str, &'static str, Option<&'static str>)],
    code: &str,
) -> Option<(&'static str, Option<&'static str>)> {
    table
        .iter()
        .find(|(key, _, _)| *key == code)
        .map(|(_, label, sublabel)| (*label, *sublabel))
}

/// The glyph physically produced by Shift + `code` on the layout, if any.
pub(super) fn shifted_glyph(code: &str, layout: KeymapLayout) -> Option<&'static str> {
    let table = match layout {
        KeymapLayout::Us => US_SHIFTED,
        KeymapLayout::Jis => JIS_SHIFTED,
    };
    table.iter().find(|(key, _)| *key == code).map(|(_, g)| *g)
}

/// Display name for a modifier identifier, if it is a known one.
pub(super) fn modifier_label(ident: &str) -> Option<&'static str> {
    MOD_LABELS
        .iter()
        .find(|(key, _)| *key == ident)
        .map(|(_, label)| *label)
}

/// Whether `code` is a bare modifier keycode.
pub(super) fn is_bare_modifier(code: &str) -> bool {
    MODIFIER_KEYS.contains(&code)
}

/// Label for `USER<n>`, if `n` names a known device-control action.
pub(super) fn user_action_label(n: usize) -> Option<&'static str> {
    USER_ACTIONS.get(n).copied()
}
