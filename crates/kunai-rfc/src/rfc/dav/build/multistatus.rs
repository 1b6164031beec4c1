//! Multistatus XML serialization.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{into_string, write_empty_qname, write_text_element};
use crate::rfc::dav::core::{CALDAV_NS, DAV_NS, Multistatus, PropstatResponse};

/// Serializes a multistatus response to XML.
///
/// ## Summary
/// Converts a `Multistatus` into a `DAV:multistatus` document with the `D:`
/// prefix bound to `DAV:`.
///
/// ## Errors
/// Returns an error if XML writing fails.
pub fn serialize_multistatus(multistatus: &Multistatus) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut elem = BytesStart::new("D:multistatus");
    elem.push_attribute(("xmlns:D", DAV_NS));
    elem.push_attribute(("xmlns:C", CALDAV_NS));
    writer.write_event(Event::Start(elem))?;

    for response in &multistatus.responses {
        write_response(&mut writer, response)?;
    }

    if let Some(ref desc) = multistatus.description {
        write_text_element(&mut writer, "D:responsedescription", desc)?;
    }

    writer.write_event(Event::End(BytesEnd::new("D:multistatus")))?;

    into_string(writer.into_inner())
}

fn write_response<W: std::io::Write>(
    writer: &mut Writer<W>,
    response: &PropstatResponse,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("D:response")))?;

    write_text_element(writer, "D:href", response.href.as_str())?;

    for propstat in &response.propstats {
        writer.write_event(Event::Start(BytesStart::new("D:propstat")))?;
        writer.write_event(Event::Start(BytesStart::new("D:prop")))?;

        for prop in &propstat.properties {
            write_empty_qname(writer, prop)?;
        }
        for value in &propstat.values {
            writer.write_event(Event::Text(BytesText::from_escaped(value.as_str())))?;
        }

        writer.write_event(Event::End(BytesEnd::new("D:prop")))?;
        write_text_element(writer, "D:status", &propstat.status.status_line())?;

        if let Some(ref desc) = propstat.description {
            write_text_element(writer, "D:responsedescription", desc)?;
        }

        writer.write_event(Event::End(BytesEnd::new("D:propstat")))?;
    }

    if let Some(status) = response.status {
        write_text_element(writer, "D:status", &status.status_line())?;
    }

    if let Some(ref desc) = response.description {
        write_text_element(writer, "D:responsedescription", desc)?;
    }

    writer.write_event(Event::End(BytesEnd::new("D:response")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::dav::core::{Href, Propstat, QName, Status, dav_props};

    #[test]
    fn serialize_lock_failure() {
        let mut multistatus = Multistatus::new();
        multistatus.add_response(PropstatResponse::with_status(
            Href::for_dav_path("/alice/cal/"),
            Status::Locked,
        ));
        let mut dependent = PropstatResponse::new(Href::for_dav_path("/alice/cal/event1.ics"));
        dependent.add_propstat(Propstat::new(
            Status::FailedDependency,
            vec![dav_props::lockdiscovery()],
        ));
        multistatus.add_response(dependent);

        let xml = serialize_multistatus(&multistatus).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("<D:multistatus xmlns:D=\"DAV:\""));
        assert!(xml.contains("<D:href>/dav/alice/cal/</D:href><D:status>HTTP/1.1 423 Locked</D:status>"));
        assert!(xml.contains("<D:prop><D:lockdiscovery/></D:prop>"));
        assert!(xml.contains("HTTP/1.1 424 Failed Dependency"));
        assert_eq!(xml.matches("<D:response>").count(), 2);
    }

    #[test]
    fn foreign_namespace_gets_default_xmlns() {
        let mut response = PropstatResponse::new("/dav/alice/");
        response.add_propstat(Propstat::new(
            Status::NotFound,
            vec![QName::new("http://example.com/ns/", "Color")],
        ));
        let multistatus = Multistatus {
            responses: vec![response],
            description: Some("a & b".to_string()),
        };

        let xml = serialize_multistatus(&multistatus).unwrap();

        assert!(xml.contains("<Color xmlns=\"http://example.com/ns/\"/>"));
        assert!(xml.contains("<D:responsedescription>a &amp; b</D:responsedescription>"));
    }

    #[test]
    fn serialized_values_are_not_escaped() {
        let mut response = PropstatResponse::new(Href::for_dav_path("/alice/"));
        let owner = "<D:owner><D:href>/dav/alice/</D:href></D:owner>".to_string();
        response.add_propstat(Propstat::new(Status::Ok, vec![]).with_value(owner));
        let mut multistatus = Multistatus::new();
        multistatus.add_response(response);

        let xml = serialize_multistatus(&multistatus).unwrap();

        assert!(xml.contains(
            "<D:prop><D:owner><D:href>/dav/alice/</D:href></D:owner></D:prop><D:status>HTTP/1.1 200 OK</D:status>"
        ));
    }
}
