//! Parsing for the Vial `.vil` export format.
//!
//! This module handles reading `.vil` JSON documents and normalizing them
//! into the strongly-typed keymap model.

pub mod vial;

// Re-export commonly used functions
pub use vial::{decode, load_keymap, parse_keymap, RawVilFile};
