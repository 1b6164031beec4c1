//! XML body builders.

mod error;
mod multistatus;

pub use error::serialize_unsupported_properties;
pub use multistatus::serialize_multistatus;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::rfc::dav::core::QName;

/// Writes a simple text element.
pub(crate) fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// ## Summary
/// Writes `name` as an empty element.
///
/// Known namespaces use their `D:`/`C:` prefix. Anything else is written
/// unprefixed with its own default `xmlns`.
pub(crate) fn write_empty_qname<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &QName,
) -> Result<(), quick_xml::Error> {
    let elem = match name.namespace.default_prefix() {
        Some(prefix) => BytesStart::new(format!("{prefix}:{}", name.local_name())),
        None => {
            let mut elem = BytesStart::new(name.local_name().to_string());
            elem.push_attribute(("xmlns", name.namespace_uri()));
            elem
        }
    };
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Converts the finished buffer into a string.
pub(crate) fn into_string(buffer: Vec<u8>) -> Result<String, quick_xml::Error> {
    String::from_utf8(buffer).map_err(|e| {
        tracing::error!("Generated invalid UTF-8 in XML output: {}", e);
        quick_xml::Error::Io(std::sync::Arc::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Invalid UTF-8 in XML output",
        )))
    })
}
