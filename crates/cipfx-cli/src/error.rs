//! CLI error types.

use std::path::PathBuf;

use cipfx_core::CipError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// No header matched any alias for a required column.
    #[error("Missing {role} column: expected one of {aliases:?}, found {headers:?}")]
    MissingColumn {
        /// What the column holds.
        role: &'static str,
        /// Accepted header names.
        aliases: Vec<String>,
        /// Headers present in the file.
        headers: Vec<String>,
    },

    /// More than one header matched the aliases of a column.
    #[error("Ambiguous {role} column: {candidates:?} all match")]
    AmbiguousColumn {
        /// What the column holds.
        role: &'static str,
        /// Matching headers.
        candidates: Vec<String>,
    },

    /// Tenor not given and not recoverable from the headers.
    #[error("Tenor not specified: pass --tenor, set `tenor` in the config, or name the rate column like 3mSOFR")]
    UnknownTenor,

    /// A cell could not be parsed.
    #[error("{path}:{line}: invalid {column} value {value:?}")]
    InvalidValue {
        /// Input file.
        path: PathBuf,
        /// 1-based line number in the file.
        line: u64,
        /// Column header.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// Engine, calendar or holiday data error.
    #[error(transparent)]
    Cip(#[from] CipError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
