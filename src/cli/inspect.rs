//! `inspect` subcommand: structured listing of one keymap section.
//!
//! Unlike `show`, inspect lists every slot including empty ones, and can
//! emit JSON for scripting. The `--filter` flag narrows the settings
//! section by option name.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use regex::Regex;
use serde::Serialize;

use super::common::{load_keymap_file, resolve_layout, CliError, CliResult};
use crate::keycodes::KeymapLayout;
use crate::models::Keymap;
use crate::render;

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Vial keymap export (.vil file) to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Section to list: meta, layers, encoders, macros, tapdance, combos,
    /// or settings
    #[arg(long, value_name = "SECTION")]
    pub section: String,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Physical layout used for shifted-glyph labels
    #[arg(long, value_enum)]
    pub layout: Option<KeymapLayout>,

    /// Keep only settings whose name matches this regex (settings section
    /// only)
    #[arg(long, value_name = "REGEX")]
    pub filter: Option<String>,
}

/// Keymap sections addressable by `--section`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Meta,
    Layers,
    Encoders,
    Macros,
    TapDance,
    Combos,
    Settings,
}

fn parse_section(name: &str) -> CliResult<Section> {
    match name {
        "meta" => Ok(Section::Meta),
        "layers" => Ok(Section::Layers),
        "encoders" => Ok(Section::Encoders),
        "macros" => Ok(Section::Macros),
        "tapdance" => Ok(Section::TapDance),
        "combos" => Ok(Section::Combos),
        "settings" => Ok(Section::Settings),
        _ => Err(CliError::validation(format!(
            "Unknown section: {name} (expected meta, layers, encoders, macros, tapdance, combos, or settings)"
        ))),
    }
}

/// JSON shape of the meta section.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MetaResponse {
    version: i64,
    uid: String,
    layer_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrix_rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrix_cols: Option<usize>,
    encoder_count: usize,
    macros_defined: usize,
    macro_slots: usize,
    tap_dances_defined: usize,
    tap_dance_slots: usize,
    combos_defined: usize,
    combo_slots: usize,
    setting_count: usize,
}

impl MetaResponse {
    fn from_keymap(keymap: &Keymap) -> Self {
        let first = keymap.layers.first();
        Self {
            version: keymap.version,
            uid: keymap.uid.clone(),
            layer_count: keymap.layers.len(),
            matrix_rows: first.map(|layer| layer.rows.len()),
            matrix_cols: first.and_then(|layer| layer.rows.first().map(Vec::len)),
            encoder_count: keymap.encoders.len(),
            macros_defined: keymap.defined_macros().count(),
            macro_slots: keymap.macros.len(),
            tap_dances_defined: keymap.defined_tap_dances().count(),
            tap_dance_slots: keymap.tap_dances.len(),
            combos_defined: keymap.defined_combos().count(),
            combo_slots: keymap.combos.len(),
            setting_count: keymap.settings.len(),
        }
    }
}

impl InspectArgs {
    /// Executes the inspect command.
    pub fn execute(&self) -> CliResult<()> {
        let section = parse_section(&self.section)?;

        let filter = match &self.filter {
            Some(pattern) if section != Section::Settings => {
                return Err(CliError::validation(format!(
                    "The --filter option applies only to the settings section (got --filter {pattern} with --section {})",
                    self.section
                )));
            }
            Some(pattern) => Some(
                Regex::new(pattern)
                    .map_err(|e| CliError::validation(format!("Invalid regex pattern: {e}")))?,
            ),
            None => None,
        };

        let keymap = load_keymap_file(&self.file)?;
        let layout = resolve_layout(self.layout)?;

        if self.json {
            print_json(&keymap, section, filter.as_ref())?;
        } else {
            print_text(&keymap, section, layout, filter.as_ref());
        }

        Ok(())
    }
}

fn print_json(keymap: &Keymap, section: Section, filter: Option<&Regex>) -> CliResult<()> {
    let rendered = match section {
        Section::Meta => to_pretty(&MetaResponse::from_keymap(keymap))?,
        Section::Layers => to_pretty(&keymap.layers)?,
        Section::Encoders => to_pretty(&keymap.encoders)?,
        Section::Macros => to_pretty(&keymap.macros)?,
        Section::TapDance => to_pretty(&keymap.tap_dances)?,
        Section::Combos => to_pretty(&keymap.combos)?,
        Section::Settings => {
            let selected: BTreeMap<&String, i64> = keymap
                .settings
                .iter()
                .filter(|(name, _)| filter.map_or(true, |regex| regex.is_match(name)))
                .map(|(name, value)| (name, *value))
                .collect();
            to_pretty(&selected)?
        }
    };
    println!("{rendered}");
    Ok(())
}

fn to_pretty<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::validation(format!("Failed to encode JSON: {e}")))
}

fn print_text(keymap: &Keymap, section: Section, layout: KeymapLayout, filter: Option<&Regex>) {
    match section {
        Section::Meta => print!("{}", render::meta_summary(keymap)),
        Section::Layers => {
            for (position, layer) in keymap.layers.iter().enumerate() {
                if position > 0 {
                    println!();
                }
                print!("{}", render::render_layer(layer, layout, &keymap.tap_dances));
            }
        }
        Section::Encoders => print!("{}", render::encoder_lines(keymap, layout)),
        Section::Macros => print!("{}", render::macro_lines(keymap, layout, true)),
        Section::TapDance => print!("{}", render::tap_dance_lines(keymap, layout, true)),
        Section::Combos => print!("{}", render::combo_lines(keymap, layout, true)),
        Section::Settings => print!("{}", render::settings_lines(keymap, filter)),
    }
}
