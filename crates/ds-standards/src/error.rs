//! Error types for data standard loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a data standard document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Document file does not exist.
    #[error("Data standard not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Document could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not a valid data standard.
    #[error("Failed to parse data standard {origin}: {source}")]
    Json {
        /// File path, or `<input>` for in-memory documents.
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for data standard loading.
pub type Result<T> = std::result::Result<T, StandardsError>;
