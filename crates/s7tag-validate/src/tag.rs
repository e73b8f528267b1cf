//! Per-tag validation and the batch partial-failure policy.

use tracing::debug;

use s7tag_model::{
    RawTagRow, S7DataType, TagDiagnostic, TypeResolution, ValidatedTag, ValidationOutcome,
};

use crate::address::validate_address;

/// Maximum tag name length accepted by the import formats.
pub const MAX_TAG_NAME_LEN: usize = 128;

/// Tag name grammar: first character a letter or underscore, the rest
/// alphanumeric or underscore, at most [`MAX_TAG_NAME_LEN`] characters.
pub fn is_valid_tag_name(name: &str) -> bool {
    if name.len() > MAX_TAG_NAME_LEN {
        return false;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Validate a whole batch of raw rows.
///
/// One malformed row never blocks the rest: rejected rows become Error
/// diagnostics and the batch continues. Accepted rows whose type token fell
/// back to the BOOL default additionally get a Warning diagnostic.
/// Diagnostics keep source-row order.
pub fn validate_rows(rows: impl IntoIterator<Item = RawTagRow>) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();
    for row in rows {
        let resolution = S7DataType::normalize(&row.data_type);
        match validate_row(&row, &resolution) {
            Ok(tag) => {
                if !resolution.recognized {
                    outcome.diagnostics.push(TagDiagnostic::warning(
                        row.row,
                        Some(tag.name.clone()),
                        format!(
                            "unrecognized data type '{}' defaulted to BOOL",
                            row.data_type.trim()
                        ),
                    ));
                }
                outcome.tags.push(tag);
            }
            Err(diagnostic) => outcome.diagnostics.push(diagnostic),
        }
    }
    debug!(
        accepted = outcome.tags.len(),
        errors = outcome.error_count(),
        warnings = outcome.warning_count(),
        "validated tag rows"
    );
    outcome
}

/// Validate one row against the name, type, and address rules.
pub fn validate_row(
    row: &RawTagRow,
    resolution: &TypeResolution,
) -> Result<ValidatedTag, TagDiagnostic> {
    let name = row.name.trim();
    if name.is_empty() {
        return Err(TagDiagnostic::error(row.row, None, "tag name is empty"));
    }
    if !is_valid_tag_name(name) {
        return Err(TagDiagnostic::error(
            row.row,
            Some(name.to_string()),
            format!(
                "invalid tag name '{name}': must start with a letter or underscore and contain \
                 only letters, digits, and underscores (max {MAX_TAG_NAME_LEN} characters)"
            ),
        ));
    }

    let address = row.address.trim();
    if address.is_empty() {
        return Err(TagDiagnostic::error(
            row.row,
            Some(name.to_string()),
            "tag has no address",
        ));
    }
    let verdict = validate_address(address);
    if !verdict.is_valid {
        let reason = verdict.reason.unwrap_or_else(|| "invalid address".to_string());
        return Err(TagDiagnostic::error(
            row.row,
            Some(name.to_string()),
            format!("invalid address '{address}': {reason}"),
        ));
    }

    Ok(ValidatedTag {
        name: name.to_string(),
        data_type: resolution.data_type,
        address: address.to_string(),
        comment: row.comment.clone(),
        initial_value: row.initial_value.clone(),
    })
}
