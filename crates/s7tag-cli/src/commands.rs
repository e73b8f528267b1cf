use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use s7tag_cli::pipeline::{ExportPlan, export, ingest, validate};
use s7tag_cli::types::{ConvertResult, OutputPaths};
use s7tag_ingest::SheetSelector;
use s7tag_model::{ALL_DATA_TYPES, ColumnMapping};
use s7tag_report::{default_output_path, timestamped_file_name};

use crate::cli::{ConvertArgs, OutputFormatArg};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let sheet: SheetSelector = args.sheet.parse().unwrap_or_default();
    let mapping = match &args.mapping {
        Some(path) => load_mapping(path)?,
        None => ColumnMapping::default(),
    };

    let rows = ingest(&args.workbook, &sheet, args.header_rows, &mapping)?;
    let outcome = validate(rows);

    let outputs = if args.dry_run {
        OutputPaths::default()
    } else {
        let plan = build_export_plan(args);
        export(&outcome.tags, &plan)?
    };

    Ok(ConvertResult {
        workbook: args.workbook.clone(),
        accepted: outcome.tags.len(),
        diagnostics: outcome.diagnostics,
        outputs,
        dry_run: args.dry_run,
    })
}

fn build_export_plan(args: &ConvertArgs) -> ExportPlan {
    let want_csv = matches!(args.format, OutputFormatArg::Csv | OutputFormatArg::Both)
        || args.out_csv.is_some();
    let want_xml = matches!(args.format, OutputFormatArg::Xml | OutputFormatArg::Both)
        || args.out_xml.is_some();
    ExportPlan {
        csv: want_csv.then(|| resolve_output(&args.out_csv, &args.output_dir, "csv")),
        xml: want_xml.then(|| resolve_output(&args.out_xml, &args.output_dir, "xml")),
    }
}

fn resolve_output(
    explicit: &Option<PathBuf>,
    output_dir: &Option<PathBuf>,
    extension: &str,
) -> PathBuf {
    match (explicit, output_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => dir.join(timestamped_file_name(extension)),
        (None, None) => default_output_path(extension),
    }
}

fn load_mapping(path: &Path) -> Result<ColumnMapping> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read mapping {}", path.display()))?;
    let mapping = serde_json::from_str(&text)
        .with_context(|| format!("parse mapping {}", path.display()))?;
    Ok(mapping)
}

pub fn run_types() -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Type"]);
    for data_type in ALL_DATA_TYPES {
        table.add_row(vec![data_type.as_str()]);
    }
    println!("{table}");
    Ok(())
}
