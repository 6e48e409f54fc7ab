//! Text rendering of decoded keymaps.
//!
//! Turns the decoded model into terminal output: box-drawing layer grids and
//! plain-text listings for the non-grid sections. All key labels go through
//! the keycode resolver so the rendered text matches what the keys do, not
//! what the raw tokens say.

pub mod grid;
pub mod sections;

pub use grid::render_layer;
pub use sections::{
    combo_lines, encoder_line, encoder_lines, macro_lines, meta_summary, settings_lines,
    tap_dance_lines,
};
