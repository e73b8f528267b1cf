//! The S7 memory-addressing grammar.
//!
//! ```text
//! address      := '%'? area-expr
//! area-expr    := mem-area | db-expr
//! mem-area     := ('I' | 'Q' | 'M') size-code? digits ('.' digits)?
//! size-code    := 'X' | 'B' | 'W' | 'D' | 'L'
//! db-expr      := 'D' 'B' digits '.' rest
//! ```
//!
//! A hand-written tokenizer rather than a pattern engine: the grammar is
//! small, and a parsed address with named fields keeps the edge cases (bit
//! range, implied size, DB sub-addressing) testable in isolation.
//!
//! Verdicts carry a reason instead of raising: the caller validates whole
//! batches and must keep going past a bad address.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An addressable region of controller memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryArea {
    Input,
    Output,
    Memory,
    DataBlock,
}

/// Width of the addressed unit within an I/Q/M area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeCode {
    /// Bit-addressed; the default when no size letter is present.
    #[default]
    Bit,
    Byte,
    Word,
    DoubleWord,
    LongWord,
}

impl SizeCode {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'X' => Some(SizeCode::Bit),
            'B' => Some(SizeCode::Byte),
            'W' => Some(SizeCode::Word),
            'D' => Some(SizeCode::DoubleWord),
            'L' => Some(SizeCode::LongWord),
            _ => None,
        }
    }
}

/// A structurally valid address, broken into named fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAddress {
    /// An I/Q/M address such as `I0.3`, `QW10`, or `MB100`.
    Memory {
        area: MemoryArea,
        size: SizeCode,
        byte: u32,
        /// Offset after the dot. Constrained to 0-7 only for bit-sized
        /// addresses; wider sizes carry it through unchecked.
        bit: Option<u32>,
    },
    /// A data-block address `DB<n>.<inner>`. The sub-address after the dot
    /// is vendor-specific and accepted verbatim.
    DataBlock { block: u32, inner: String },
}

/// Why an address failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,
    #[error("address must start with I, Q, M, or D (Input, Output, Memory, or Data block)")]
    UnknownArea,
    #[error("invalid address format for I/Q/M area")]
    MalformedMemory,
    #[error("bit address must be between 0 and 7")]
    BitOutOfRange,
    #[error("invalid DB address format")]
    MalformedDataBlock,
}

/// Pass/fail-with-reason result of address validation. Created once per tag,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressVerdict {
    pub is_valid: bool,
    pub reason: Option<String>,
}

impl AddressVerdict {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    fn invalid(reason: String) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason),
        }
    }
}

/// Validate a raw address string, folding the parse result into a verdict.
pub fn validate_address(raw: &str) -> AddressVerdict {
    match parse_address(raw) {
        Ok(_) => AddressVerdict::valid(),
        Err(error) => AddressVerdict::invalid(error.to_string()),
    }
}

/// Parse a raw address against the grammar.
///
/// Input is trimmed and uppercased, and a single leading `%` is stripped;
/// writers re-attach the `%` on export.
pub fn parse_address(raw: &str) -> Result<ParsedAddress, AddressError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AddressError::Empty);
    }
    let upper = trimmed.to_ascii_uppercase();
    let body = upper.strip_prefix('%').unwrap_or(&upper);

    match body.chars().next() {
        Some('I') => parse_memory(MemoryArea::Input, &body[1..]),
        Some('Q') => parse_memory(MemoryArea::Output, &body[1..]),
        Some('M') => parse_memory(MemoryArea::Memory, &body[1..]),
        Some('D') => parse_data_block(body),
        _ => Err(AddressError::UnknownArea),
    }
}

fn parse_memory(area: MemoryArea, rest: &str) -> Result<ParsedAddress, AddressError> {
    // Optional size letter, then the byte offset digits.
    let (size_letter, offset_part) = match rest.chars().next() {
        Some(letter) if SizeCode::from_letter(letter).is_some() => {
            (SizeCode::from_letter(letter), &rest[1..])
        }
        Some(_) => (None, rest),
        None => return Err(AddressError::MalformedMemory),
    };

    let digits_end = offset_part
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(offset_part.len());
    if digits_end == 0 {
        return Err(AddressError::MalformedMemory);
    }
    let (digits, tail) = offset_part.split_at(digits_end);
    let byte: u32 = digits.parse().map_err(|_| AddressError::MalformedMemory)?;

    let bit = match tail.strip_prefix('.') {
        Some(bit_digits) => {
            if bit_digits.is_empty() || !bit_digits.chars().all(|ch| ch.is_ascii_digit()) {
                return Err(AddressError::MalformedMemory);
            }
            Some(bit_digits.parse().map_err(|_| AddressError::MalformedMemory)?)
        }
        None => {
            if !tail.is_empty() {
                return Err(AddressError::MalformedMemory);
            }
            None
        }
    };

    let size = size_letter.unwrap_or_default();
    if size == SizeCode::Bit {
        // Bit-addressed (explicit X or no size letter): the bit suffix is
        // required and limited to one byte's worth of bits.
        match bit {
            Some(bit) if bit <= 7 => {}
            _ => return Err(AddressError::BitOutOfRange),
        }
    }

    Ok(ParsedAddress::Memory {
        area,
        size,
        byte,
        bit,
    })
}

fn parse_data_block(body: &str) -> Result<ParsedAddress, AddressError> {
    let rest = body
        .strip_prefix("DB")
        .ok_or(AddressError::MalformedDataBlock)?;
    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return Err(AddressError::MalformedDataBlock);
    }
    let (digits, tail) = rest.split_at(digits_end);
    let block: u32 = digits
        .parse()
        .map_err(|_| AddressError::MalformedDataBlock)?;
    let inner = tail
        .strip_prefix('.')
        .ok_or(AddressError::MalformedDataBlock)?;
    if inner.is_empty() {
        return Err(AddressError::MalformedDataBlock);
    }
    Ok(ParsedAddress::DataBlock {
        block,
        inner: inner.to_string(),
    })
}
