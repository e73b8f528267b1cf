//! Structured tag-table writer (TIA-Portal XML import document).

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::info;

use s7tag_model::ValidatedTag;

use crate::common::{ensure_parent_dir, normalize_address};
use crate::error::{ExportError, Result};

/// Schema the import document declares.
pub const TAG_TABLE_SCHEMA: &str = "Siemens.Simatic.Tags.Xml.xsd";

/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Document format version.
pub const TAG_TABLE_VERSION: &str = "1.0";

/// Render the import document, pretty-printed with two-space indentation.
/// Zero tags yields an empty `ObjectList` element.
pub fn render_tag_table_xml(tags: &[ValidatedTag]) -> io::Result<Vec<u8>> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("Document");
    root.push_attribute(("xsi:noNamespaceSchemaLocation", TAG_TABLE_SCHEMA));
    root.push_attribute(("xmlns:xsi", XSI_NS));
    root.push_attribute(("Version", TAG_TABLE_VERSION));
    xml.write_event(Event::Start(root))?;

    xml.write_event(Event::Empty(BytesStart::new("AttributeList")))?;

    if tags.is_empty() {
        xml.write_event(Event::Empty(BytesStart::new("ObjectList")))?;
    } else {
        xml.write_event(Event::Start(BytesStart::new("ObjectList")))?;
        for tag in tags {
            write_tag_element(&mut xml, tag)?;
        }
        xml.write_event(Event::End(BytesEnd::new("ObjectList")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("Document")))?;
    Ok(xml.into_inner())
}

fn write_tag_element<W: Write>(xml: &mut Writer<W>, tag: &ValidatedTag) -> io::Result<()> {
    let mut node = BytesStart::new("Tag");
    node.push_attribute(("Name", tag.name.as_str()));
    xml.write_event(Event::Start(node))?;

    xml.write_event(Event::Start(BytesStart::new("AttributeList")))?;
    write_text_element(xml, "LogicalAddress", &normalize_address(&tag.address))?;
    write_text_element(xml, "DataTypeName", tag.data_type.as_str())?;
    write_text_element(xml, "Comment", &tag.comment)?;
    write_text_element(xml, "ExternalAccessible", "true")?;
    write_text_element(xml, "ExternalVisible", "true")?;
    write_text_element(xml, "ExternalWritable", "true")?;
    xml.write_event(Event::End(BytesEnd::new("AttributeList")))?;

    xml.write_event(Event::End(BytesEnd::new("Tag")))?;
    Ok(())
}

/// Write a simple text element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write the structured tag table, creating the destination directory first.
pub fn write_tag_table_xml(tags: &[ValidatedTag], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let document = render_tag_table_xml(tags).map_err(|source| ExportError::io(path, source))?;
    fs::write(path, document).map_err(|source| ExportError::io(path, source))?;
    info!(tags = tags.len(), path = %path.display(), "wrote structured tag table");
    Ok(())
}
