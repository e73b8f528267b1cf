use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use s7tag_model::DiagnosticSeverity;

use crate::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Workbook: {}", result.workbook.display());
    println!("Accepted tags: {}", result.accepted);
    if result.dry_run {
        println!("Dry run: no files written");
    }
    if let Some(path) = &result.outputs.csv {
        println!("Tag table (CSV): {}", path.display());
    }
    if let Some(path) = &result.outputs.xml {
        println!("Tag table (XML): {}", path.display());
    }

    let skipped = result.error_count();
    let warnings = result.warning_count();
    if skipped > 0 || warnings > 0 {
        println!("Skipped rows: {skipped}, warnings: {warnings}");
    }
    print_diagnostic_table(result);
}

fn print_diagnostic_table(result: &ConvertResult) {
    if result.diagnostics.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Tag"),
        header_cell("Severity"),
        header_cell("Message"),
    ]);
    apply_diagnostic_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for diagnostic in &result.diagnostics {
        table.add_row(vec![
            Cell::new(diagnostic.row),
            match diagnostic.tag_name.as_deref() {
                Some(name) => Cell::new(name),
                None => dim_cell("-"),
            },
            severity_cell(diagnostic.severity),
            Cell::new(&diagnostic.message),
        ]);
    }
    println!();
    println!("Diagnostics:");
    println!("{table}");
}

fn apply_diagnostic_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: DiagnosticSeverity) -> Cell {
    match severity {
        DiagnosticSeverity::Error => Cell::new("ERROR").fg(Color::Red),
        DiagnosticSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
