//! End-to-end pipeline scenarios (validation through export).

use std::fs;

use s7tag_cli::pipeline::{ExportPlan, export, validate};
use s7tag_model::{RawTagRow, S7DataType};
use s7tag_report::TAG_TABLE_HEADER;

fn row(number: u32, name: &str, data_type: &str, address: &str) -> RawTagRow {
    RawTagRow {
        row: number,
        name: name.to_string(),
        data_type: data_type.to_string(),
        address: address.to_string(),
        comment: String::new(),
        initial_value: String::new(),
    }
}

#[test]
fn accepted_rows_export_with_normalized_addresses() {
    let outcome = validate(vec![
        row(2, "Motor1_Running", "bool", "I0.0"),
        row(3, "Tank_Level", "float", "DB5.DBD12"),
        row(4, "Flow_Rate", "integer64", "M10.5"),
    ]);
    assert_eq!(outcome.tags.len(), 3);
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.tags[0].data_type, S7DataType::Bool);
    assert_eq!(outcome.tags[1].data_type, S7DataType::Real);
    assert_eq!(outcome.tags[2].data_type, S7DataType::Lint);

    let dir = tempfile::tempdir().expect("tempdir");
    let plan = ExportPlan {
        csv: Some(dir.path().join("tags.csv")),
        xml: Some(dir.path().join("tags.xml")),
    };
    let outputs = export(&outcome.tags, &plan).expect("export");

    let csv = fs::read_to_string(outputs.csv.expect("csv path")).expect("read csv");
    assert!(csv.contains("Motor1_Running;;BOOL;%I0.0;;True;True"));
    assert!(csv.contains("Tank_Level;;REAL;%DB5.DBD12;;True;True"));
    assert!(csv.contains("Flow_Rate;;LINT;%M10.5;;True;True"));

    let xml = fs::read_to_string(outputs.xml.expect("xml path")).expect("read xml");
    assert!(xml.contains("<Tag Name=\"Motor1_Running\">"));
    assert!(xml.contains("<LogicalAddress>%DB5.DBD12</LogicalAddress>"));
}

#[test]
fn rejected_row_does_not_block_the_batch() {
    let outcome = validate(vec![
        row(2, "Bad Name!", "int", "Q0.0"),
        row(3, "Conveyor_Run", "int", "Q0.1"),
    ]);
    assert_eq!(outcome.tags.len(), 1);
    assert_eq!(outcome.error_count(), 1);
    assert!(outcome.diagnostics[0].message.contains("invalid tag name"));

    let dir = tempfile::tempdir().expect("tempdir");
    let plan = ExportPlan {
        csv: Some(dir.path().join("tags.csv")),
        xml: None,
    };
    let outputs = export(&outcome.tags, &plan).expect("export");
    let csv = fs::read_to_string(outputs.csv.expect("csv path")).expect("read csv");
    assert!(csv.contains("Conveyor_Run"));
    assert!(!csv.contains("Bad Name!"));
}

#[test]
fn implied_bit_size_without_suffix_is_skipped() {
    let outcome = validate(vec![row(2, "Pump_Status", "bool", "Q100")]);
    assert!(outcome.tags.is_empty());
    assert!(
        outcome.diagnostics[0]
            .message
            .contains("bit address must be between 0 and 7")
    );
}

#[test]
fn empty_batch_exports_header_only_artifacts() {
    let outcome = validate(Vec::new());
    assert_eq!(outcome.tags.len(), 0);
    assert!(outcome.diagnostics.is_empty());

    let dir = tempfile::tempdir().expect("tempdir");
    let plan = ExportPlan {
        csv: Some(dir.path().join("empty.csv")),
        xml: Some(dir.path().join("empty.xml")),
    };
    let outputs = export(&outcome.tags, &plan).expect("export");

    let csv = fs::read_to_string(outputs.csv.expect("csv path")).expect("read csv");
    assert_eq!(csv, format!("{TAG_TABLE_HEADER}\n"));

    let xml = fs::read_to_string(outputs.xml.expect("xml path")).expect("read xml");
    assert!(xml.contains("<ObjectList/>"));
}
