//! `config` subcommand: show or change the persisted defaults.

use clap::Args;

use super::common::{CliError, CliResult};
use crate::config::Config;
use crate::keycodes::KeymapLayout;

/// Arguments for the `config` subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Persist this layout as the default for all commands
    #[arg(long, value_enum, value_name = "LAYOUT")]
    pub set_layout: Option<KeymapLayout>,
}

impl ConfigArgs {
    /// Executes the config command.
    pub fn execute(&self) -> CliResult<()> {
        if let Some(layout) = self.set_layout {
            let config = Config { layout };
            config
                .save()
                .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;
            println!("Configuration updated successfully.");
            println!("Layout: {layout}");
            return Ok(());
        }

        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        println!("vilview Configuration");
        println!("=====================");
        println!();
        match Config::config_file_path() {
            Ok(path) => {
                let status = if path.exists() { "" } else { " (not created)" };
                println!("Config file: {}{status}", path.display());
            }
            Err(_) => println!("Config file: (unavailable)"),
        }
        println!("Layout: {}", config.layout);

        Ok(())
    }
}
