//! Header normalization.

use kunai_core::config::DavConfig;
use kunai_core::constants::DAV_ROUTE_PREFIX;
use kunai_rfc::rfc::dav::core::{DavMethod, Depth};
use kunai_rfc::rfc::dav::headers::{
    IfHeader, TimeoutRequest, destination, etag, lock_token, overwrite,
};

use crate::error::ServiceResult;

/// Protocol headers as received, before any interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHeaders {
    pub depth: Option<String>,
    pub destination: Option<String>,
    pub overwrite: Option<String>,
    pub if_header: Option<String>,
    pub lock_token: Option<String>,
    pub timeout: Option<String>,
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    pub content_type: Option<String>,
}

impl RawHeaders {
    /// ## Summary
    /// Collects the protocol headers through a name lookup.
    ///
    /// `lookup` receives canonical header names such as `"Lock-Token"`.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            depth: lookup("Depth"),
            destination: lookup("Destination"),
            overwrite: lookup("Overwrite"),
            if_header: lookup("If"),
            lock_token: lookup("Lock-Token"),
            timeout: lookup("Timeout"),
            if_match: lookup("If-Match"),
            if_none_match: lookup("If-None-Match"),
            content_type: lookup("Content-Type"),
        }
    }
}

/// Typed protocol headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedHeaders {
    pub depth: Depth,
    pub destination: Option<String>,
    pub overwrite: bool,
    pub if_header: Option<IfHeader>,
    pub lock_token: Option<String>,
    pub timeout: Option<TimeoutRequest>,
    pub etag_if_match: Option<String>,
    pub etag_if_none_match: Option<String>,
    pub content_type: Option<String>,
}

impl NormalizedHeaders {
    /// ## Summary
    /// Interprets the raw headers for `method`.
    ///
    /// ## Errors
    /// Returns `InvalidHeader` for a malformed `Depth`. Every other header
    /// degrades to its default instead of failing.
    pub fn normalize(raw: &RawHeaders, method: &DavMethod, dav: &DavConfig) -> ServiceResult<Self> {
        let depth = Depth::for_request(raw.depth.as_deref(), method)?;

        Ok(Self {
            depth,
            destination: destination::parse(raw.destination.as_deref(), DAV_ROUTE_PREFIX),
            overwrite: overwrite::parse(raw.overwrite.as_deref()),
            if_header: IfHeader::parse(raw.if_header.as_deref()),
            lock_token: lock_token::parse(raw.lock_token.as_deref()),
            timeout: TimeoutRequest::parse(
                raw.timeout.as_deref(),
                dav.maximum_lock_timeout,
                dav.default_lock_timeout,
            ),
            etag_if_match: etag::normalize(raw.if_match.as_deref()),
            etag_if_none_match: etag::normalize(raw.if_none_match.as_deref()),
            content_type: raw
                .content_type
                .as_deref()
                .map(str::trim)
                .filter(|ct| !ct.is_empty())
                .map(ToString::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    fn raw(pairs: &[(&str, &str)]) -> RawHeaders {
        RawHeaders::from_lookup(|name| {
            pairs
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| (*v).to_string())
        })
    }

    #[test]
    fn defaults_without_headers() {
        let headers =
            NormalizedHeaders::normalize(&RawHeaders::default(), &DavMethod::Report, &DavConfig::default())
                .unwrap();
        assert_eq!(headers.depth, Depth::Zero);
        assert!(headers.overwrite);
        assert_eq!(headers.timeout, None);
        assert_eq!(headers.lock_token, None);
        assert_eq!(headers.if_header, None);
        assert_eq!(headers.destination, None);
    }

    #[test]
    fn all_headers() {
        let headers = NormalizedHeaders::normalize(
            &raw(&[
                ("Depth", "1"),
                ("Destination", "https://example.com/dav/alice/new.ics"),
                ("Overwrite", "F"),
                ("If", "(<opaquelocktoken:abc>)"),
                ("Lock-Token", "<opaquelocktoken:abc>"),
                ("Timeout", "Second-30"),
                ("If-Match", "\"v1\""),
                ("If-None-Match", "\"\""),
                ("Content-Type", "text/xml"),
            ]),
            &DavMethod::Move,
            &DavConfig::default(),
        )
        .unwrap();

        assert_eq!(headers.depth, Depth::One);
        assert_eq!(headers.destination.as_deref(), Some("/alice/new.ics"));
        assert!(!headers.overwrite);
        assert_eq!(headers.lock_token.as_deref(), Some("abc"));
        assert!(headers.if_header.is_some_and(|h| h.contains_token("abc")));
        assert_eq!(headers.timeout.map(|t| t.effective), Some(8_640_000));
        assert_eq!(headers.etag_if_match.as_deref(), Some("v1"));
        assert_eq!(headers.etag_if_none_match, None);
        assert_eq!(headers.content_type.as_deref(), Some("text/xml"));
    }

    #[test]
    fn malformed_depth_is_a_client_error() {
        let err = NormalizedHeaders::normalize(
            &raw(&[("Depth", "-1")]),
            &DavMethod::Propfind,
            &DavConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidHeader { name: "Depth", .. }));
        assert!(err.is_client_error());
    }
}
