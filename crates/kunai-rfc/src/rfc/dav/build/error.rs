//! `DAV:error` bodies.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use super::into_string;
use crate::rfc::dav::core::{DAV_NS, QName};

/// ## Summary
/// Serializes the 422 body listing properties the server does not support.
///
/// Produces `<error xmlns="DAV:"><prop>...</prop></error>` with one empty
/// element per property, each declared in its own namespace. Local names and
/// foreign namespaces are lowercased. `DAV:` names stay in the default
/// namespace.
///
/// ## Errors
/// Returns an error if XML writing fails.
pub fn serialize_unsupported_properties(properties: &[QName]) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("error");
    root.push_attribute(("xmlns", DAV_NS));
    writer.write_event(Event::Start(root))?;
    writer.write_event(Event::Start(BytesStart::new("prop")))?;

    for property in properties {
        let mut elem = BytesStart::new(property.local_name().to_lowercase());
        if !property.is_dav() {
            elem.push_attribute(("xmlns", property.namespace_uri().to_lowercase().as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
    }

    writer.write_event(Event::End(BytesEnd::new("prop")))?;
    writer.write_event(Event::End(BytesEnd::new("error")))?;

    into_string(writer.into_inner())
}
