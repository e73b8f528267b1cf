//! Shared helpers for the export writers.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

use crate::error::{ExportError, Result};

/// Re-normalize an address for emission: trimmed, uppercased, exactly one
/// leading `%`. Idempotent - re-applying to already-formatted output yields
/// the same string.
pub fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let upper = trimmed.to_ascii_uppercase();
    if upper.starts_with('%') {
        upper
    } else {
        format!("%{upper}")
    }
}

/// Escape one delimited-format field. A field containing the delimiter or a
/// newline gets internal quotes doubled and the whole field wrapped in
/// quotes; anything else passes through verbatim.
pub fn escape_field(text: &str) -> Cow<'_, str> {
    if text.contains(';') || text.contains('\n') {
        Cow::Owned(format!("\"{}\"", text.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(text)
    }
}

/// Create the target's parent directory if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

/// A collision-free output filename: literal stem plus a UTC timestamp with
/// `:` and `.` replaced so the name stays directory-safe on every platform.
pub fn timestamped_file_name(extension: &str) -> String {
    let stamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
        .replace([':', '.'], "-");
    format!("s7_tags_{stamp}.{extension}")
}

/// Default output path when the caller supplies none: the working directory
/// plus a timestamped filename.
pub fn default_output_path(extension: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(timestamped_file_name(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_address_adds_percent_and_uppercases() {
        assert_eq!(normalize_address("i0.0"), "%I0.0");
        assert_eq!(normalize_address(" db5.dbd12 "), "%DB5.DBD12");
        assert_eq!(normalize_address("%QW10"), "%QW10");
        assert_eq!(normalize_address(""), "");
    }

    #[test]
    fn normalize_address_is_idempotent() {
        for raw in ["i0.0", "%I0.0", "db5.dbd12", "MW100", ""] {
            let once = normalize_address(raw);
            assert_eq!(normalize_address(&once), once);
        }
    }

    #[test]
    fn escape_field_wraps_only_when_needed() {
        assert_eq!(escape_field("plain comment"), "plain comment");
        assert_eq!(escape_field("semi;colon"), "\"semi;colon\"");
        assert_eq!(escape_field("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(
            escape_field("quote \" and; more"),
            "\"quote \"\" and; more\""
        );
        // A quote alone does not trigger wrapping.
        assert_eq!(escape_field("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn timestamped_name_is_directory_safe() {
        let name = timestamped_file_name("csv");
        assert!(name.starts_with("s7_tags_"));
        assert!(name.ends_with(".csv"));
        let stem = name.trim_end_matches(".csv");
        assert!(!stem.contains(':'));
        assert!(!stem.contains('.'));
    }
}
