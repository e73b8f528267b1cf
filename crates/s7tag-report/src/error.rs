//! Error types for export writers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing export artifacts. Always carries the path the
/// writer was targeting.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
