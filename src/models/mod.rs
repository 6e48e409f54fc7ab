//! Data models for decoded keymaps.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and business
//! logic.

pub mod keymap;

// Re-export all model types
pub use keymap::{Cell, Combo, EncoderBinding, Keymap, Layer, MacroAction, MacroSlot, TapDance};
