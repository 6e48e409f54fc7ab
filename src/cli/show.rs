//! `show` subcommand: render a keymap as layer grids.
//!
//! Prints every layer (or one, with `--layer`) as a box-drawing grid,
//! followed by the non-empty macro, tap-dance, combo, and settings
//! summaries.

use std::path::PathBuf;

use clap::Args;

use super::common::{load_keymap_file, resolve_layout, CliError, CliResult};
use crate::keycodes::KeymapLayout;
use crate::render;

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Vial keymap export (.vil file) to render
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Render only this layer
    #[arg(short, long)]
    pub layer: Option<usize>,

    /// Physical layout used for shifted-glyph labels
    #[arg(long, value_enum)]
    pub layout: Option<KeymapLayout>,
}

impl ShowArgs {
    /// Executes the show command.
    pub fn execute(&self) -> CliResult<()> {
        let keymap = load_keymap_file(&self.file)?;
        let layout = resolve_layout(self.layout)?;

        if let Some(layer) = self.layer {
            if layer >= keymap.layers.len() {
                return Err(CliError::validation(format!(
                    "Layer {layer} out of range (keymap has {} layers)",
                    keymap.layers.len()
                )));
            }
        }

        println!("Keymap version {}, uid {}", keymap.version, keymap.uid);

        for layer in &keymap.layers {
            if self.layer.is_some_and(|wanted| wanted != layer.index) {
                continue;
            }
            println!();
            print!("{}", render::render_layer(layer, layout, &keymap.tap_dances));
            for binding in keymap.encoders_for_layer(layer.index) {
                println!(
                    "{}",
                    render::encoder_line(binding, layout, &keymap.tap_dances)
                );
            }
        }

        let macros = render::macro_lines(&keymap, layout, false);
        if !macros.is_empty() {
            println!();
            println!("Macros");
            print!("{macros}");
        }

        let tap_dances = render::tap_dance_lines(&keymap, layout, false);
        if !tap_dances.is_empty() {
            println!();
            println!("Tap dances");
            print!("{tap_dances}");
        }

        let combos = render::combo_lines(&keymap, layout, false);
        if !combos.is_empty() {
            println!();
            println!("Combos");
            print!("{combos}");
        }

        println!();
        println!("Settings: {} options", keymap.settings.len());

        Ok(())
    }
}
