pub mod data_type;
pub mod diagnostic;
pub mod mapping;
pub mod tag;

pub use data_type::{ALL_DATA_TYPES, S7DataType, TypeResolution};
pub use diagnostic::{DiagnosticSeverity, TagDiagnostic, ValidationOutcome};
pub use mapping::{ColumnMapping, ColumnRef};
pub use tag::{RawTagRow, ValidatedTag};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_counts() {
        let outcome = ValidationOutcome {
            tags: vec![],
            diagnostics: vec![
                TagDiagnostic::error(3, Some("Pump_1".to_string()), "invalid address"),
                TagDiagnostic::warning(4, Some("Valve_2".to_string()), "type defaulted"),
            ],
        };
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.warning_count(), 1);
        assert!(outcome.has_errors());
    }

    #[test]
    fn validated_tag_serializes() {
        let tag = ValidatedTag {
            name: "Motor1_Running".to_string(),
            data_type: S7DataType::Bool,
            address: "I0.0".to_string(),
            comment: String::new(),
            initial_value: String::new(),
        };
        let json = serde_json::to_string(&tag).expect("serialize tag");
        let round: ValidatedTag = serde_json::from_str(&json).expect("deserialize tag");
        assert_eq!(round, tag);
    }

    #[test]
    fn blank_row_detection() {
        let row = RawTagRow {
            row: 12,
            name: " ".to_string(),
            data_type: String::new(),
            address: String::new(),
            comment: String::new(),
            initial_value: String::new(),
        };
        assert!(row.is_blank());
    }
}
