//! Tag value records.

use serde::{Deserialize, Serialize};

use crate::data_type::S7DataType;

/// One spreadsheet row's worth of raw tag fields, before validation.
///
/// Missing cells read as the empty string. `row` is the 1-based source row
/// number, kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTagRow {
    pub row: u32,
    pub name: String,
    pub data_type: String,
    pub address: String,
    pub comment: String,
    pub initial_value: String,
}

impl RawTagRow {
    /// True when every logical field is empty - a blank spreadsheet tail row,
    /// not a tag.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.data_type.trim().is_empty()
            && self.address.trim().is_empty()
            && self.comment.trim().is_empty()
            && self.initial_value.trim().is_empty()
    }
}

/// A tag whose name, type, and address have all passed validation.
///
/// `address` is stored as given in the source; writers re-normalize it
/// (leading `%`, uppercase) on emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedTag {
    pub name: String,
    pub data_type: S7DataType,
    pub address: String,
    pub comment: String,
    pub initial_value: String,
}
