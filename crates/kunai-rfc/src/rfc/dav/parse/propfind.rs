//! PROPFIND request XML parsing.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{RfcError, RfcResult};
use crate::rfc::dav::core::{DAV_NS, QName};

/// ## Summary
/// Lists the properties named inside `DAV:prop` of a PROPFIND body.
///
/// An empty body, `allprop` and `propname` name no property and give an
/// empty list.
///
/// ## Errors
/// Returns `MalformedXml` if the body is not well-formed.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn requested_properties(xml: &[u8]) -> RfcResult<Vec<QName>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut namespaces: Vec<(String, String)> = Vec::new();
    let mut in_prop = false;
    let mut properties = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e) | Event::Empty(ref e)) => {
                collect_namespaces(e, &mut namespaces)?;
                let name = resolve_qname(e, &namespaces)?;
                if in_prop {
                    properties.push(name);
                } else if name.is_dav() && name.local_name() == "prop" {
                    in_prop = true;
                } else {
                    // propfind, allprop and propname carry no names
                }
            }
            Ok(Event::End(ref e)) => {
                if e.local_name().as_ref() == b"prop" {
                    in_prop = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(RfcError::MalformedXml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    tracing::debug!(count = properties.len(), "Parsed PROPFIND body");
    Ok(properties)
}

fn utf8(bytes: &[u8]) -> RfcResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| RfcError::MalformedXml(e.to_string()))
}

fn collect_namespaces(e: &BytesStart<'_>, namespaces: &mut Vec<(String, String)>) -> RfcResult<()> {
    for attr in e.attributes().flatten() {
        let key = utf8(attr.key.as_ref())?;
        let value = utf8(&attr.value)?;
        if let Some(prefix) = key.strip_prefix("xmlns:") {
            namespaces.push((prefix.to_string(), value.to_string()));
        } else if key == "xmlns" {
            namespaces.push((String::new(), value.to_string()));
        } else {
            // Other attributes ignored
        }
    }
    Ok(())
}

/// Resolves an element name against the declarations seen so far. An
/// undeclared prefix falls back to `DAV:`.
fn resolve_qname(e: &BytesStart<'_>, namespaces: &[(String, String)]) -> RfcResult<QName> {
    let name = e.name();
    let name = utf8(name.as_ref())?;
    let (prefix, local_name) = name.split_once(':').unwrap_or(("", name));

    let namespace = namespaces
        .iter()
        .rev()
        .find(|(p, _)| p == prefix)
        .map_or(DAV_NS, |(_, ns)| ns.as_str());

    Ok(QName::new(namespace.to_string(), local_name.to_string()))
}
