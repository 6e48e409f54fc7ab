//! `keycode` subcommand: resolve a single keycode token.
//!
//! Useful for checking what a token will look like on a rendered grid
//! without opening the whole keymap. Tap-dance tokens resolve with an
//! empty context unless `--file` supplies a keymap to borrow it from.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use super::common::{load_keymap_file, resolve_layout, CliError, CliResult};
use crate::keycodes::{self, KeyCategory, KeymapLayout};
use crate::models::TapDance;

/// Arguments for the `keycode` subcommand.
#[derive(Args, Debug)]
pub struct KeycodeArgs {
    /// Keycode token to resolve (e.g. KC_A, LT1(KC_SPACE), TD(3))
    #[arg(value_name = "TOKEN")]
    pub token: String,

    /// Physical layout used for shifted-glyph labels
    #[arg(long, value_enum)]
    pub layout: Option<KeymapLayout>,

    /// Vial export whose tap-dance table provides resolution context
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of one resolved token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct KeycodeResponse<'a> {
    token: &'a str,
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_label: Option<&'a str>,
    category: KeyCategory,
    display: &'a str,
}

impl KeycodeArgs {
    /// Executes the keycode command.
    pub fn execute(&self) -> CliResult<()> {
        let layout = resolve_layout(self.layout)?;
        let tap_dances: Vec<TapDance> = match &self.file {
            Some(path) => load_keymap_file(path)?.tap_dances,
            None => Vec::new(),
        };

        let parsed = keycodes::resolve(&self.token, layout, &tap_dances);
        let display = parsed.compact_text();

        if self.json {
            let response = KeycodeResponse {
                token: &self.token,
                label: &parsed.label,
                sub_label: parsed.sub_label.as_deref(),
                secondary_label: parsed.secondary_label.as_deref(),
                category: parsed.category,
                display: &display,
            };
            let rendered = serde_json::to_string_pretty(&response)
                .map_err(|e| CliError::validation(format!("Failed to encode JSON: {e}")))?;
            println!("{rendered}");
        } else {
            println!("Token:     {}", self.token);
            println!("Label:     {}", parsed.label);
            if let Some(sub_label) = &parsed.sub_label {
                println!("Sub-label: {sub_label}");
            }
            if let Some(secondary) = &parsed.secondary_label {
                println!("Secondary: {secondary}");
            }
            println!("Category:  {}", parsed.category);
            println!("Display:   {display}");
        }

        Ok(())
    }
}
