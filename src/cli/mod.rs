//! CLI command handlers for vilview.
//!
//! Each subcommand is a clap `Args` struct with an
//! `execute() -> CliResult<()>` method; `main` maps the error variant to a
//! process exit code.

pub mod common;
pub mod config;
pub mod inspect;
pub mod keycode;
pub mod show;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use inspect::InspectArgs;
pub use keycode::KeycodeArgs;
pub use show::ShowArgs;
