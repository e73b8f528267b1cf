//! Reading raw tag rows out of an Excel workbook.

use std::path::Path;
use std::str::FromStr;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use s7tag_model::{ColumnMapping, ColumnRef, RawTagRow};

use crate::error::{IngestError, Result};

/// Workbook extensions accepted for ingestion. Checked by extension, not
/// content sniffing.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls"];

/// Selects a worksheet by zero-based index or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

impl FromStr for SheetSelector {
    type Err = std::convert::Infallible;

    /// A purely numeric selector is an index; anything else is a sheet name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(index) => Ok(SheetSelector::Index(index)),
            Err(_) => Ok(SheetSelector::Name(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetSelector::Index(index) => write!(f, "#{index}"),
            SheetSelector::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Read all tag rows from one worksheet.
///
/// Rows at or below `header_rows` (a 1-based count of leading header lines)
/// are skipped, as are rows whose five mapped fields are all empty. Missing
/// or out-of-range cells read as the empty string, never as an error.
pub fn read_tag_rows(
    path: &Path,
    sheet: &SheetSelector,
    header_rows: u32,
    mapping: &ColumnMapping,
) -> Result<Vec<RawTagRow>> {
    check_extension(path)?;

    let mut workbook = open_workbook_auto(path).map_err(|error| IngestError::OpenWorkbook {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;

    let sheet_names = workbook.sheet_names().to_owned();
    if sheet_names.is_empty() {
        return Err(IngestError::NoWorksheet {
            path: path.to_path_buf(),
        });
    }

    let sheet_name = resolve_sheet(sheet, &sheet_names, path)?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|error| IngestError::ReadSheet {
            sheet: sheet_name.clone(),
            message: error.to_string(),
        })?;

    // The decoded range is positioned at the sheet's used-range origin, not
    // necessarily A1; offsets keep row numbers and column indices absolute.
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    let mut rows = Vec::new();
    for (index, cells) in range.rows().enumerate() {
        let row_number = start_row + index as u32 + 1;
        if row_number <= header_rows {
            continue;
        }
        let row = RawTagRow {
            row: row_number,
            name: cell_text(cells, start_col, mapping.name.as_ref()),
            data_type: cell_text(cells, start_col, mapping.data_type.as_ref()),
            address: cell_text(cells, start_col, mapping.address.as_ref()),
            comment: cell_text(cells, start_col, mapping.comment.as_ref()),
            initial_value: cell_text(cells, start_col, mapping.initial_value.as_ref()),
        };
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    debug!(
        sheet = %sheet_name,
        rows = rows.len(),
        "read tag rows from workbook"
    );
    Ok(rows)
}

fn check_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(IngestError::UnsupportedFormat { extension })
    }
}

fn resolve_sheet(selector: &SheetSelector, sheet_names: &[String], path: &Path) -> Result<String> {
    let resolved = match selector {
        SheetSelector::Name(name) => sheet_names.iter().find(|candidate| *candidate == name),
        SheetSelector::Index(index) => sheet_names.get(*index),
    };
    resolved
        .cloned()
        .ok_or_else(|| IngestError::SheetNotFound {
            requested: selector.to_string(),
            path: path.to_path_buf(),
            detected: sheet_names.to_vec(),
        })
}

/// Fetch one mapped cell as text. An unmapped column, an unresolvable
/// reference, or a cell beyond the row's extent all read as empty.
fn cell_text(cells: &[Data], start_col: u32, column: Option<&ColumnRef>) -> String {
    let Some(index) = column.and_then(ColumnRef::to_index) else {
        return String::new();
    };
    // 1-based absolute column to a slot within the decoded row.
    let Some(slot) = (index - 1).checked_sub(start_col) else {
        return String::new();
    };
    match cells.get(slot as usize) {
        Some(cell) => cell_string(cell),
        None => String::new(),
    }
}

/// Stringify a cell. Engineering lists routinely hold numbers where text is
/// expected (initial values, numeric type columns), so every scalar variant
/// is accepted.
fn cell_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.trim().to_string(),
        Data::Int(value) => format!("{value}"),
        Data::Float(value) => format!("{value}"),
        Data::Bool(value) => {
            if *value {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        other => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn rejects_unsupported_extension_before_touching_the_file() {
        let error = read_tag_rows(
            Path::new("tags.txt"),
            &SheetSelector::default(),
            1,
            &ColumnMapping::default(),
        )
        .unwrap_err();
        assert!(matches!(
            error,
            IngestError::UnsupportedFormat { extension } if extension == "txt"
        ));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(check_extension(Path::new("Tags.XLSX")).is_ok());
        assert!(check_extension(Path::new("tags.xlsm")).is_ok());
        assert!(check_extension(Path::new("legacy.xls")).is_ok());
        assert!(check_extension(Path::new("tags.csv")).is_err());
        assert!(check_extension(Path::new("tags")).is_err());
    }

    #[test]
    fn sheet_selector_parses_index_or_name() {
        assert_eq!("2".parse::<SheetSelector>().unwrap(), SheetSelector::Index(2));
        assert_eq!(
            "IO List".parse::<SheetSelector>().unwrap(),
            SheetSelector::Name("IO List".to_string())
        );
    }

    #[test]
    fn resolve_sheet_reports_detected_names() {
        let names = vec!["Tags".to_string(), "Alarms".to_string()];
        let error = resolve_sheet(
            &SheetSelector::Name("Motors".to_string()),
            &names,
            &PathBuf::from("plant.xlsx"),
        )
        .unwrap_err();
        match error {
            IngestError::SheetNotFound { detected, .. } => assert_eq!(detected, names),
            other => panic!("unexpected error: {other}"),
        }
        assert!(resolve_sheet(&SheetSelector::Index(1), &names, Path::new("plant.xlsx")).is_ok());
        assert!(resolve_sheet(&SheetSelector::Index(2), &names, Path::new("plant.xlsx")).is_err());
    }

    #[test]
    fn cell_text_reads_mapped_columns() {
        let cells = vec![
            Data::String("Motor1_Running".to_string()),
            Data::String(" bool ".to_string()),
            Data::Float(5.0),
            Data::Empty,
        ];
        let name = ColumnRef::Letter("A".to_string());
        let data_type = ColumnRef::Letter("B".to_string());
        let address = ColumnRef::Index(3);
        let beyond = ColumnRef::Letter("H".to_string());
        assert_eq!(cell_text(&cells, 0, Some(&name)), "Motor1_Running");
        assert_eq!(cell_text(&cells, 0, Some(&data_type)), "bool");
        assert_eq!(cell_text(&cells, 0, Some(&address)), "5");
        assert_eq!(cell_text(&cells, 0, Some(&beyond)), "");
        assert_eq!(cell_text(&cells, 0, None), "");
    }

    #[test]
    fn cell_text_respects_a_shifted_used_range() {
        // A sheet whose data starts in column B decodes with start_col = 1.
        let cells = vec![
            Data::String("Motor1_Running".to_string()),
            Data::String("bool".to_string()),
        ];
        let name = ColumnRef::Letter("B".to_string());
        let before_range = ColumnRef::Letter("A".to_string());
        assert_eq!(cell_text(&cells, 1, Some(&name)), "Motor1_Running");
        assert_eq!(cell_text(&cells, 1, Some(&before_range)), "");
    }
}
