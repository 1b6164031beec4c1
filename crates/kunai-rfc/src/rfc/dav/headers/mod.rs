//! Request header parsers.
//!
//! Each parser takes the raw header value (or `None` when absent) and returns
//! a typed value. None of them touch the request itself.

pub mod destination;
pub mod etag;
pub mod if_header;
pub mod lock_token;
pub mod overwrite;
pub mod timeout;

pub use if_header::IfHeader;
pub use timeout::TimeoutRequest;

/// Returns `true` when a `Content-Type` value announces an XML body.
#[must_use]
pub fn is_xml_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    matches!(mime.as_str(), "application/xml" | "text/xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_content_types() {
        assert!(is_xml_content_type("text/xml"));
        assert!(is_xml_content_type("application/xml; charset=\"utf-8\""));
        assert!(is_xml_content_type("Text/XML;charset=utf-8"));
        assert!(!is_xml_content_type("text/calendar"));
        assert!(!is_xml_content_type(""));
    }
}
