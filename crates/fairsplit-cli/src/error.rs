//! Error handling for the fairsplit command line
//!
//! Allocation never fails; everything here comes from reading configuration,
//! bill files and command-line items, or from talking to the terminal.

use fairsplit_calculator::SplitError;
use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file could not be parsed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Terminal or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bill file was not valid JSON or did not match the expected layout
    #[error("Invalid bill file '{path}': {source}")]
    BillFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Output could not be serialized
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `--item` argument could not be read
    #[error("Invalid item '{value}': {reason}")]
    InvalidItem { value: String, reason: String },

    /// The bill itself was rejected
    #[error(transparent)]
    Split(#[from] SplitError),
}

impl CliError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CliError::Config { .. } => "config",
            CliError::Io(_) => "io",
            CliError::BillFile { .. } => "bill_file",
            CliError::Json(_) => "json",
            CliError::InvalidItem { .. } => "invalid_item",
            CliError::Split(e) => e.category(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
