//! Error types for GBX CLI
//!
//! User-facing errors with messages that say what went wrong and what to try next.

use gbx_common::GbxError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Input directory is missing or not a directory
    #[error("Directory '{0}' does not exist or is not a directory. Pass a directory containing GenBank flat files (*.gbff).")]
    DirectoryNotFound(PathBuf),

    /// Parsing failed (strict mode or configuration problem)
    #[error("Failed to parse GenBank files: {0}. Fix the file or run without --strict to skip it.")]
    Parse(#[source] GbxError),

    /// Result file could not be written
    #[error("Failed to write to file '{path}': {source}. Check file permissions and disk space.")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your GBX_* environment variables or .env file.")]
    Config(String),

    /// JSON serialization failed
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an output error for `path`
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}

impl From<GbxError> for CliError {
    fn from(err: GbxError) -> Self {
        match err {
            GbxError::InvalidDirectory(path) => Self::DirectoryNotFound(path),
            GbxError::Config(msg) => Self::Config(msg),
            other => Self::Parse(other),
        }
    }
}
