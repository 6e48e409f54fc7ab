//! Vial keymap viewer library
//!
//! This library provides the core functionality of vilview: parsing Vial
//! `.vil` keymap exports, resolving QMK keycode tokens into display labels,
//! and rendering layers, encoders, macros, tap dances, combos, and settings
//! as text.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod keycodes;
pub mod models;
pub mod parser;
pub mod render;
