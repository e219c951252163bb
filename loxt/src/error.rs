//! Error handling module for the loxt CLI.
//!
//! Every fallible operation in the binary returns [`Result`], so `?` carries
//! IO and JSON failures up to `main` unchanged; scanner failures are
//! wrapped with the name of the file that produced them.

use loxc_lex::LexError;
use thiserror::Error;

/// Main error type for the loxt CLI application.
#[derive(Error, Debug)]
pub enum LoxtError {
    /// Error when the configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a command-line value is not acceptable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A source file failed to scan.
    #[error("{path}: {source}")]
    Scan {
        /// File name as given on the command line.
        path: String,
        /// The scanner diagnostic.
        #[source]
        source: LexError,
    },

    /// One or more files reported by `check` did not scan cleanly.
    #[error("{0} file(s) failed to scan")]
    CheckFailed(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LoxtError.
pub type Result<T> = std::result::Result<T, LoxtError>;
