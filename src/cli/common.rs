//! Shared plumbing for CLI subcommands.
//!
//! Every subcommand returns a `CliResult`, and `main` turns the error
//! variant into a process exit code: validation failures exit with 1,
//! I/O failures with 2.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::keycodes::KeymapLayout;
use crate::models::Keymap;
use crate::parser;

/// Result type used by all subcommand `execute` methods.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes shared by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed normally.
    Success = 0,
    /// Input was readable but invalid (bad document, bad arguments).
    Validation = 1,
    /// A file could not be read or written.
    Io = 2,
}

/// Error raised by a subcommand, carrying its exit class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Reading or writing a file failed.
    Io(String),
    /// The input or arguments were understood but rejected.
    Validation(String),
}

impl CliError {
    /// Creates an I/O error with the given message.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => ExitCode::Io as i32,
            Self::Validation(_) => ExitCode::Validation as i32,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(message) | Self::Validation(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Reads and parses a Vial keymap export.
///
/// A read failure is an I/O error; a file that reads fine but does not
/// parse as a keymap is a validation error.
pub fn load_keymap_file(path: &Path) -> CliResult<Keymap> {
    if path.extension().map_or(true, |ext| ext != "vil") {
        eprintln!(
            "Warning: Expected a Vial export (.vil), but got: {}",
            path.display()
        );
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read keymap file {}: {e}", path.display())))?;

    parser::parse_keymap(&raw).map_err(|e| CliError::validation(format!("{e:#}")))
}

/// Resolves the layout to use: an explicit flag wins, otherwise the
/// persisted configuration (falling back to its default).
pub fn resolve_layout(flag: Option<KeymapLayout>) -> CliResult<KeymapLayout> {
    if let Some(layout) = flag {
        return Ok(layout);
    }

    let config = Config::load().map_err(|e| CliError::validation(format!("{e:#}")))?;
    Ok(config.layout)
}
