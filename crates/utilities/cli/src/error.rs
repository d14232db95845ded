//! Error types for CLI utilities.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that can occur in CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// The parameter file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file extension is neither `json` nor `toml`.
    #[error("Unsupported parameter file format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    /// The JSON payload could not be decoded, or failed validation.
    #[error("Invalid JSON network parameters: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML payload could not be decoded, or failed validation.
    #[error("Invalid TOML network parameters: {0}")]
    Toml(#[from] toml::de::Error),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize tracing: {0}")]
    TracingInit(String),
}

/// Type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
