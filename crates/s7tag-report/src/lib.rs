pub mod common;
pub mod error;
pub mod tag_table_csv;
pub mod tag_table_xml;

pub use common::{
    default_output_path, ensure_parent_dir, escape_field, normalize_address, timestamped_file_name,
};
pub use error::{ExportError, Result};
pub use tag_table_csv::{TAG_TABLE_HEADER, render_tag_table_csv, write_tag_table_csv};
pub use tag_table_xml::{
    TAG_TABLE_SCHEMA, TAG_TABLE_VERSION, XSI_NS, render_tag_table_xml, write_tag_table_xml,
};
