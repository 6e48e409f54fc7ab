//! Keycode interpretation: token grammar, lookup tables, display labels.
//!
//! The resolver turns raw keycode tokens (as stored in a decoded keymap)
//! into structured, layout-aware display labels. It is a pure function of
//! its inputs and never fails; unknown tokens degrade to a literal label.

mod resolve;
mod tables;

pub use resolve::{compact_label, resolve, KeyCategory, ParsedToken};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Physical key layout used for label lookup.
///
/// JIS overrides a subset of punctuation/symbol keys and IME-control keys;
/// everything else is shared with US.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeymapLayout {
    /// ANSI US layout.
    Us,
    /// Japanese JIS layout.
    #[default]
    Jis,
}

impl std::fmt::Display for KeymapLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Us => write!(f, "us"),
            Self::Jis => write!(f, "jis"),
        }
    }
}
