//! Conversion pipeline with explicit stages.
//!
//! The pipeline runs these stages in order:
//! 1. **Ingest**: read raw tag rows from the workbook
//! 2. **Validate**: normalize types, check names and addresses, collect
//!    diagnostics (skipped rows never abort the run)
//! 3. **Export**: write the requested tag-table artifacts
//!
//! Each stage takes the output of the previous stage and returns typed
//! results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use s7tag_ingest::{SheetSelector, read_tag_rows};
use s7tag_model::{ColumnMapping, RawTagRow, ValidatedTag, ValidationOutcome};
use s7tag_report::{write_tag_table_csv, write_tag_table_xml};
use s7tag_validate::validate_rows;

use crate::types::OutputPaths;

/// Stage 1: read raw rows from the selected worksheet.
pub fn ingest(
    workbook: &Path,
    sheet: &SheetSelector,
    header_rows: u32,
    mapping: &ColumnMapping,
) -> Result<Vec<RawTagRow>> {
    let span = info_span!("ingest", workbook = %workbook.display(), sheet = %sheet);
    let _guard = span.enter();
    let rows = read_tag_rows(workbook, sheet, header_rows, mapping)
        .with_context(|| format!("read {}", workbook.display()))?;
    info!(rows = rows.len(), "ingested tag rows");
    Ok(rows)
}

/// Stage 2: validate the batch, collecting per-row diagnostics.
pub fn validate(rows: Vec<RawTagRow>) -> ValidationOutcome {
    let span = info_span!("validate");
    let _guard = span.enter();
    let outcome = validate_rows(rows);
    info!(
        accepted = outcome.tags.len(),
        skipped = outcome.error_count(),
        "validated tag rows"
    );
    outcome
}

/// Which artifacts stage 3 should write.
#[derive(Debug, Clone, Default)]
pub struct ExportPlan {
    pub csv: Option<PathBuf>,
    pub xml: Option<PathBuf>,
}

/// Stage 3: write the requested artifacts.
pub fn export(tags: &[ValidatedTag], plan: &ExportPlan) -> Result<OutputPaths> {
    let span = info_span!("export", tags = tags.len());
    let _guard = span.enter();
    let mut outputs = OutputPaths::default();
    if let Some(path) = &plan.csv {
        write_tag_table_csv(tags, path)
            .with_context(|| format!("export {}", path.display()))?;
        outputs.csv = Some(path.clone());
    }
    if let Some(path) = &plan.xml {
        write_tag_table_xml(tags, path)
            .with_context(|| format!("export {}", path.display()))?;
        outputs.xml = Some(path.clone());
    }
    Ok(outputs)
}
