//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal ingestion failures. Per-row problems are not errors here; they are
/// handled downstream as diagnostics.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file extension is not a workbook format.
    #[error("unsupported file format '.{extension}': use .xlsx, .xlsm, or .xls")]
    UnsupportedFormat { extension: String },

    /// The workbook could not be opened or decoded.
    #[error("failed to open workbook {path}: {message}")]
    OpenWorkbook { path: PathBuf, message: String },

    /// The workbook contains no worksheets at all.
    #[error("workbook has no worksheets: {path}")]
    NoWorksheet { path: PathBuf },

    /// The requested sheet (by name or index) is absent.
    #[error("worksheet '{requested}' not found in {path} (available: {})", detected.join(", "))]
    SheetNotFound {
        requested: String,
        path: PathBuf,
        detected: Vec<String>,
    },

    /// The selected sheet's cell range could not be read.
    #[error("failed to read worksheet '{sheet}': {message}")]
    ReadSheet { sheet: String, message: String },
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
