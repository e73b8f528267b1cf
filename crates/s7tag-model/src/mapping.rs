//! Column-mapping configuration for workbook ingestion.

use serde::{Deserialize, Serialize};

/// A spreadsheet column reference: a letter reference (`"C"`, `"AA"`) or a
/// literal 1-based index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Index(u32),
    Letter(String),
}

impl ColumnRef {
    /// Resolve to a 1-based column index.
    ///
    /// Letter references use base-26 arithmetic (`A` = 1, `Z` = 26, `AA` = 27).
    /// A letter string that is not purely alphabetic is parsed as a number,
    /// matching spreadsheet tooling that accepts `"3"` where `"C"` is meant.
    /// Returns `None` for empty or zero references.
    pub fn to_index(&self) -> Option<u32> {
        match self {
            ColumnRef::Index(index) => (*index > 0).then_some(*index),
            ColumnRef::Letter(letters) => {
                let trimmed = letters.trim();
                if trimmed.is_empty() {
                    return None;
                }
                if trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    let mut index: u32 = 0;
                    for ch in trimmed.chars() {
                        let digit = ch.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
                        index = index.checked_mul(26)?.checked_add(digit)?;
                    }
                    Some(index)
                } else {
                    trimmed.parse::<u32>().ok().filter(|index| *index > 0)
                }
            }
        }
    }
}

/// Maps the five logical tag fields to workbook columns.
///
/// Deserialized from JSON where each field is a column letter or numeric
/// index (`{"name": "A", "dataType": 2}`). A missing field reads as the
/// empty string for every row. Immutable for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnMapping {
    pub name: Option<ColumnRef>,
    pub data_type: Option<ColumnRef>,
    pub address: Option<ColumnRef>,
    pub comment: Option<ColumnRef>,
    pub initial_value: Option<ColumnRef>,
}

impl Default for ColumnMapping {
    /// Columns A-E in field order, the layout of a plain exported tag list.
    fn default() -> Self {
        Self {
            name: Some(ColumnRef::Letter("A".to_string())),
            data_type: Some(ColumnRef::Letter("B".to_string())),
            address: Some(ColumnRef::Letter("C".to_string())),
            comment: Some(ColumnRef::Letter("D".to_string())),
            initial_value: Some(ColumnRef::Letter("E".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_arithmetic() {
        assert_eq!(ColumnRef::Letter("A".into()).to_index(), Some(1));
        assert_eq!(ColumnRef::Letter("z".into()).to_index(), Some(26));
        assert_eq!(ColumnRef::Letter("AA".into()).to_index(), Some(27));
        assert_eq!(ColumnRef::Letter("AZ".into()).to_index(), Some(52));
        assert_eq!(ColumnRef::Letter("BA".into()).to_index(), Some(53));
    }

    #[test]
    fn numeric_references() {
        assert_eq!(ColumnRef::Index(3).to_index(), Some(3));
        assert_eq!(ColumnRef::Index(0).to_index(), None);
        assert_eq!(ColumnRef::Letter("12".into()).to_index(), Some(12));
        assert_eq!(ColumnRef::Letter("".into()).to_index(), None);
    }

    #[test]
    fn deserializes_letters_and_numbers() {
        let mapping: ColumnMapping =
            serde_json::from_str(r#"{"name": "C", "dataType": 2, "address": "AB"}"#).unwrap();
        assert_eq!(mapping.name, Some(ColumnRef::Letter("C".into())));
        assert_eq!(mapping.data_type, Some(ColumnRef::Index(2)));
        assert_eq!(mapping.address.unwrap().to_index(), Some(28));
        assert_eq!(mapping.comment, None);
    }

    #[test]
    fn default_mapping_is_first_five_columns() {
        let mapping = ColumnMapping::default();
        let indices: Vec<Option<u32>> = [
            mapping.name,
            mapping.data_type,
            mapping.address,
            mapping.comment,
            mapping.initial_value,
        ]
        .iter()
        .map(|column| column.as_ref().and_then(ColumnRef::to_index))
        .collect();
        assert_eq!(
            indices,
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }
}
