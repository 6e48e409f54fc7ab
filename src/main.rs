//! vilview - Terminal viewer for Vial keymap exports
//!
//! Renders `.vil` JSON exports as box-drawing layer grids and structured
//! listings, and resolves individual keycode tokens to their display labels.

use clap::{Parser, Subcommand};

use vilview::cli::{ConfigArgs, InspectArgs, KeycodeArgs, ShowArgs};

/// vilview - Terminal viewer for Vial keymap exports
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a keymap as box-drawing layer grids
    Show(ShowArgs),
    /// List one section of a keymap, as text or JSON
    Inspect(InspectArgs),
    /// Resolve a single keycode token
    Keycode(KeycodeArgs),
    /// Show or change the persisted configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
        Commands::Keycode(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}
