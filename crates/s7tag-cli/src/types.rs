use std::path::PathBuf;

use s7tag_model::{DiagnosticSeverity, TagDiagnostic};

/// Paths of the artifacts a run actually wrote.
#[derive(Debug, Clone, Default)]
pub struct OutputPaths {
    pub csv: Option<PathBuf>,
    pub xml: Option<PathBuf>,
}

/// Everything the summary needs about one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub workbook: PathBuf,
    pub accepted: usize,
    pub diagnostics: Vec<TagDiagnostic>,
    pub outputs: OutputPaths,
    pub dry_run: bool,
}

impl ConvertResult {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == DiagnosticSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == DiagnosticSeverity::Warning)
            .count()
    }
}
