//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the keymap sentinel tokens.

/// The application name; also the config directory name.
pub const APP_NAME: &str = "vilview";

/// Environment variable that overrides the config directory location.
pub const CONFIG_DIR_ENV: &str = "VILVIEW_CONFIG_DIR";

/// Token meaning "nothing assigned" at a key position.
pub const NOOP_TOKEN: &str = "KC_NO";

/// Token meaning "this physical position does not exist on this board".
pub const DISABLED_TOKEN: &str = "XXXXXXX";

/// Default tapping term in milliseconds when an export omits or mangles it.
pub const DEFAULT_TAPPING_TERM_MS: u32 = 200;
