pub mod address;
pub mod tag;

pub use address::{
    AddressError, AddressVerdict, MemoryArea, ParsedAddress, SizeCode, parse_address,
    validate_address,
};
pub use tag::{MAX_TAG_NAME_LEN, is_valid_tag_name, validate_row, validate_rows};
