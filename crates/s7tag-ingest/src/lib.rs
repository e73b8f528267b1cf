pub mod error;
pub mod workbook;

pub use error::{IngestError, Result};
pub use workbook::{SUPPORTED_EXTENSIONS, SheetSelector, read_tag_rows};
