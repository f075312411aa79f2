//! Error types for GBX

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for GBX operations
pub type Result<T> = std::result::Result<T, GbxError>;

/// Main error type for GBX
#[derive(Error, Debug)]
pub enum GbxError {
    /// A line source could not be produced for a file (missing, unreadable, bad gzip header).
    #[error("Source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A PUBMED line carried a payload that is not an integer.
    #[error("Malformed number on line {line}: '{value}'")]
    MalformedNumber {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Not a readable directory: {0}")]
    InvalidDirectory(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GbxError {
    /// Build a [`GbxError::SourceUnavailable`] for `path`.
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// IO-level classification of the error, if it has one.
    ///
    /// A missing input file reports [`io::ErrorKind::NotFound`].
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            GbxError::SourceUnavailable { source, .. } => Some(source.kind()),
            GbxError::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}
