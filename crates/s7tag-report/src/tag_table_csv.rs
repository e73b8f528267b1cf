//! Delimited tag-table writer (TIA-Portal CSV import dialect).

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;

use s7tag_model::ValidatedTag;

use crate::common::{ensure_parent_dir, escape_field, normalize_address};
use crate::error::{ExportError, Result};

/// Fixed header line of the import format. The `Path` column is always
/// empty and both Hmi flags are always `True`.
pub const TAG_TABLE_HEADER: &str =
    "Name;Path;DataType;LogicalAddress;Comment;Hmi Visible;Hmi Accessible";

/// Render the delimited document. Zero tags yields a header-only document.
pub fn render_tag_table_csv(tags: &[ValidatedTag]) -> String {
    let mut out = String::with_capacity(64 * (tags.len() + 1));
    out.push_str(TAG_TABLE_HEADER);
    out.push('\n');
    for tag in tags {
        let address = normalize_address(&tag.address);
        let comment = escape_field(&tag.comment);
        let _ = writeln!(
            out,
            "{};;{};{};{};True;True",
            tag.name,
            tag.data_type.as_str(),
            address,
            comment
        );
    }
    out
}

/// Write the delimited tag table, creating the destination directory first.
pub fn write_tag_table_csv(tags: &[ValidatedTag], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, render_tag_table_csv(tags)).map_err(|source| ExportError::io(path, source))?;
    info!(tags = tags.len(), path = %path.display(), "wrote delimited tag table");
    Ok(())
}
