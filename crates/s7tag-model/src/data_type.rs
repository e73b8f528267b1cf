//! Canonical S7 data types and normalization of engineering type tokens.
//!
//! Tag lists arrive with whatever spelling the authoring tool produced
//! (`integer32`, `float64`, `Bool`, `Array[0..7] of Int`). Normalization maps
//! every token to exactly one member of the controller's type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One member of the S7 primitive/composite type enumeration.
///
/// Spellings follow the vendor's tag-table import formats. `TOD`/`TIME_OF_DAY`
/// and `DT`/`DATE_AND_TIME` are distinct members: a source list that uses the
/// short vendor spelling keeps it on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum S7DataType {
    Bool,
    Byte,
    Word,
    Dword,
    Lword,
    Char,
    Wchar,
    String,
    Wstring,
    Sint,
    Int,
    Dint,
    Lint,
    Usint,
    Uint,
    Udint,
    Ulint,
    Real,
    Lreal,
    S5Time,
    Time,
    Date,
    TimeOfDay,
    Tod,
    DateAndTime,
    Dt,
    Dtl,
    Array,
    Struct,
    Udt,
}

/// Every member, in the order the vendor documents them.
pub const ALL_DATA_TYPES: [S7DataType; 30] = [
    S7DataType::Bool,
    S7DataType::Byte,
    S7DataType::Word,
    S7DataType::Dword,
    S7DataType::Lword,
    S7DataType::Char,
    S7DataType::Wchar,
    S7DataType::String,
    S7DataType::Wstring,
    S7DataType::Sint,
    S7DataType::Int,
    S7DataType::Dint,
    S7DataType::Lint,
    S7DataType::Usint,
    S7DataType::Uint,
    S7DataType::Udint,
    S7DataType::Ulint,
    S7DataType::Real,
    S7DataType::Lreal,
    S7DataType::S5Time,
    S7DataType::Time,
    S7DataType::Date,
    S7DataType::TimeOfDay,
    S7DataType::Tod,
    S7DataType::DateAndTime,
    S7DataType::Dt,
    S7DataType::Dtl,
    S7DataType::Array,
    S7DataType::Struct,
    S7DataType::Udt,
];

impl S7DataType {
    /// Returns the canonical spelling used in tag-table exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            S7DataType::Bool => "BOOL",
            S7DataType::Byte => "BYTE",
            S7DataType::Word => "WORD",
            S7DataType::Dword => "DWORD",
            S7DataType::Lword => "LWORD",
            S7DataType::Char => "CHAR",
            S7DataType::Wchar => "WCHAR",
            S7DataType::String => "STRING",
            S7DataType::Wstring => "WSTRING",
            S7DataType::Sint => "SINT",
            S7DataType::Int => "INT",
            S7DataType::Dint => "DINT",
            S7DataType::Lint => "LINT",
            S7DataType::Usint => "USINT",
            S7DataType::Uint => "UINT",
            S7DataType::Udint => "UDINT",
            S7DataType::Ulint => "ULINT",
            S7DataType::Real => "REAL",
            S7DataType::Lreal => "LREAL",
            S7DataType::S5Time => "S5TIME",
            S7DataType::Time => "TIME",
            S7DataType::Date => "DATE",
            S7DataType::TimeOfDay => "TIME_OF_DAY",
            S7DataType::Tod => "TOD",
            S7DataType::DateAndTime => "DATE_AND_TIME",
            S7DataType::Dt => "DT",
            S7DataType::Dtl => "DTL",
            S7DataType::Array => "ARRAY",
            S7DataType::Struct => "STRUCT",
            S7DataType::Udt => "UDT",
        }
    }

    /// Normalize a raw engineering type token into the enumeration.
    ///
    /// Total: always resolves to a member. Priority order:
    /// 1. empty token: BOOL (the conventional shorthand for bit tags)
    /// 2. exact member spelling, case-insensitive
    /// 3. array markers (`array` substring or `[`)
    /// 4. `udt` / `struct` substrings
    /// 5. alias table (`integer32`, `double`, `word int`, ...)
    /// 6. BOOL fallback, flagged unrecognized so callers can diagnose
    pub fn normalize(raw: &str) -> TypeResolution {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return TypeResolution::recognized(S7DataType::Bool);
        }
        if let Ok(exact) = trimmed.parse::<S7DataType>() {
            return TypeResolution::recognized(exact);
        }
        let lowered = trimmed.to_lowercase();
        if lowered.contains("array") || lowered.contains('[') {
            return TypeResolution::recognized(S7DataType::Array);
        }
        if lowered.contains("udt") {
            return TypeResolution::recognized(S7DataType::Udt);
        }
        if lowered.contains("struct") {
            return TypeResolution::recognized(S7DataType::Struct);
        }
        match alias_lookup(&lowered) {
            Some(mapped) => TypeResolution::recognized(mapped),
            None => TypeResolution::unrecognized(S7DataType::Bool),
        }
    }
}

impl fmt::Display for S7DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for S7DataType {
    type Err = String;

    /// Parse an exact member spelling, case-insensitive. Aliases are not
    /// accepted here; use [`S7DataType::normalize`] for lenient resolution.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        ALL_DATA_TYPES
            .iter()
            .find(|member| member.as_str() == normalized)
            .copied()
            .ok_or_else(|| format!("unknown S7 data type: {s}"))
    }
}

/// Outcome of type normalization: the resolved member, and whether the token
/// was actually recognized or fell back to the BOOL default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeResolution {
    pub data_type: S7DataType,
    pub recognized: bool,
}

impl TypeResolution {
    fn recognized(data_type: S7DataType) -> Self {
        Self {
            data_type,
            recognized: true,
        }
    }

    fn unrecognized(data_type: S7DataType) -> Self {
        Self {
            data_type,
            recognized: false,
        }
    }
}

/// Alias table for common engineering spellings, keyed by lowercased token.
fn alias_lookup(token: &str) -> Option<S7DataType> {
    let mapped = match token {
        "bit" | "boolean" | "bool" => S7DataType::Bool,
        "byte" => S7DataType::Byte,
        "word" => S7DataType::Word,
        "dword" => S7DataType::Dword,
        "lword" => S7DataType::Lword,
        "char" => S7DataType::Char,
        "integer" | "int" | "integer16" | "int16" | "short" => S7DataType::Int,
        "integer32" | "int32" | "long" | "dint" => S7DataType::Dint,
        "integer64" | "int64" | "lint" => S7DataType::Lint,
        "uint" | "uint16" | "word int" => S7DataType::Uint,
        "uint32" | "udint" | "dword int" => S7DataType::Udint,
        "uint64" | "ulint" | "lword int" => S7DataType::Ulint,
        "real" | "float" | "single" | "float32" => S7DataType::Real,
        "double" | "float64" | "lreal" => S7DataType::Lreal,
        "string" | "str" => S7DataType::String,
        "wstring" => S7DataType::Wstring,
        "time" => S7DataType::Time,
        "date" => S7DataType::Date,
        "tod" => S7DataType::Tod,
        "timeofday" => S7DataType::TimeOfDay,
        "dt" => S7DataType::Dt,
        "datetime" | "dateandtime" => S7DataType::DateAndTime,
        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_spelling_passes_through() {
        assert_eq!(
            S7DataType::normalize("TOD").data_type,
            S7DataType::Tod,
            "short vendor spelling must not widen to TIME_OF_DAY"
        );
        assert_eq!(S7DataType::normalize("dword").data_type, S7DataType::Dword);
        assert_eq!(
            S7DataType::normalize(" S5TIME ").data_type,
            S7DataType::S5Time
        );
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(
            S7DataType::normalize("integer32").data_type,
            S7DataType::Dint
        );
        assert_eq!(S7DataType::normalize("double").data_type, S7DataType::Lreal);
        assert_eq!(S7DataType::normalize("bit").data_type, S7DataType::Bool);
        assert_eq!(
            S7DataType::normalize("integer64").data_type,
            S7DataType::Lint
        );
        assert_eq!(
            S7DataType::normalize("dword int").data_type,
            S7DataType::Udint
        );
        assert_eq!(S7DataType::normalize("float").data_type, S7DataType::Real);
        assert!(S7DataType::normalize("float64").recognized);
    }

    #[test]
    fn array_and_struct_markers() {
        assert_eq!(
            S7DataType::normalize("Array[0..7] of Int").data_type,
            S7DataType::Array
        );
        assert_eq!(S7DataType::normalize("int[8]").data_type, S7DataType::Array);
        assert_eq!(
            S7DataType::normalize("struct MotorData").data_type,
            S7DataType::Struct
        );
        assert_eq!(
            S7DataType::normalize("udt_Valve").data_type,
            S7DataType::Udt
        );
    }

    #[test]
    fn empty_defaults_to_bool() {
        let resolved = S7DataType::normalize("");
        assert_eq!(resolved.data_type, S7DataType::Bool);
        assert!(resolved.recognized);
    }

    #[test]
    fn unknown_token_falls_back_flagged() {
        let resolved = S7DataType::normalize("quaternion");
        assert_eq!(resolved.data_type, S7DataType::Bool);
        assert!(!resolved.recognized);
    }

    #[test]
    fn from_str_rejects_aliases() {
        assert!("integer32".parse::<S7DataType>().is_err());
        assert_eq!(
            "time_of_day".parse::<S7DataType>().unwrap(),
            S7DataType::TimeOfDay
        );
    }

    #[test]
    fn display_round_trips_all_members() {
        for member in ALL_DATA_TYPES {
            assert_eq!(member.as_str().parse::<S7DataType>().unwrap(), member);
        }
    }
}
