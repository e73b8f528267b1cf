//! Per-row validation diagnostics.
//!
//! Rejecting a row never aborts the batch: the row is dropped, a diagnostic
//! is recorded, and the remaining rows proceed. Diagnostics are returned as
//! data so any caller - CLI, batch job, service - can render them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tag::ValidatedTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticSeverity {
    /// The row was accepted but deserves attention (e.g. a type token that
    /// fell back to the BOOL default).
    Warning,
    /// The row was rejected and skipped.
    Error,
}

impl DiagnosticSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Error => "error",
        }
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One diagnostic attached to one source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDiagnostic {
    /// 1-based source row number.
    pub row: u32,
    /// Tag name, when one could be read from the row.
    pub tag_name: Option<String>,
    pub severity: DiagnosticSeverity,
    pub message: String,
}

impl TagDiagnostic {
    pub fn warning(row: u32, tag_name: Option<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            tag_name,
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn error(row: u32, tag_name: Option<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            tag_name,
            severity: DiagnosticSeverity::Error,
            message: message.into(),
        }
    }
}

/// Accepted tags plus the diagnostics collected while validating a batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub tags: Vec<ValidatedTag>,
    pub diagnostics: Vec<TagDiagnostic>,
}

impl ValidationOutcome {
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

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
