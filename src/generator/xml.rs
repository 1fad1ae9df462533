//! Tag table XML generator.

use crate::config::{ROOT_ELEMENT, TAG_ELEMENT};
use crate::error::Result;
use crate::model::{flag_str, TagDescriptor};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Render the tag table document.
///
/// Attribute values and element text are escaped by the writer, so the
/// output always re-parses.
pub fn generate_xml(tags: &[TagDescriptor], table_name: &str) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new(ROOT_ELEMENT);
    root.push_attribute(("name", table_name));
    writer.write_event(Event::Start(root))?;

    for tag in tags {
        write_tag(&mut writer, tag)?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    let mut output = String::from_utf8_lossy(&writer.into_inner()).into_owned();
    output.push('\n');
    Ok(output)
}

fn write_tag(writer: &mut Writer<Vec<u8>>, tag: &TagDescriptor) -> Result<()> {
    let mut element = BytesStart::new(TAG_ELEMENT);
    element.push_attribute(("type", tag.data_type.as_str()));
    element.push_attribute(("hmiVisible", flag_str(tag.flags.hmi_visible)));
    element.push_attribute(("hmiWriteable", flag_str(tag.flags.hmi_writeable)));
    element.push_attribute(("hmiAccessible", flag_str(tag.flags.hmi_accessible)));
    element.push_attribute(("retain", flag_str(tag.flags.retain)));
    element.push_attribute(("remark", tag.remark.as_str()));
    element.push_attribute(("addr", tag.address.as_str()));

    writer.write_event(Event::Start(element))?;
    writer.write_event(Event::Text(BytesText::new(&tag.name)))?;
    writer.write_event(Event::End(BytesEnd::new(TAG_ELEMENT)))?;
    Ok(())
}
