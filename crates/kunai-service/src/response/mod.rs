//! Terminal responses.
//!
//! Every failure the gate emits is a `DavResponse` wrapped in
//! `Outcome::Terminate`. The transport layer writes it and logs it once.

mod compose;
mod outcome;

pub use compose::{lock_failure, supported_privileges, unsupported_request};
pub use outcome::Outcome;

use kunai_core::constants::{SERVER_VERSION, VERSION_HEADER};
use kunai_rfc::rfc::dav::core::status;

use crate::error::ServiceError;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=\"utf-8\"";
pub const XML_CONTENT_TYPE: &str = "text/xml; charset=\"utf-8\"";

const LOG_MESSAGE_LIMIT: usize = 100;

/// A complete response ready to be written by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DavResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
    /// Quoted entity tag.
    pub etag: Option<String>,
    /// Extra headers, in order.
    pub headers: Vec<(String, String)>,
}

impl DavResponse {
    fn new(status: u16, content_type: &str, body: String) -> Self {
        Self {
            status,
            content_type: Some(content_type.to_string()),
            body,
            etag: None,
            headers: vec![(VERSION_HEADER.to_string(), SERVER_VERSION.to_string())],
        }
    }

    /// A plain-text response.
    #[must_use]
    pub fn text(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, TEXT_CONTENT_TYPE, message.into())
    }

    /// ## Summary
    /// An XML response whose `ETag` is the MD5 of the body.
    #[must_use]
    pub fn xml(status: u16, body: String) -> Self {
        let etag = format!("\"{:x}\"", md5::compute(body.as_bytes()));
        Self {
            etag: Some(etag),
            ..Self::new(status, XML_CONTENT_TYPE, body)
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns `HTTP/1.1 <code> <reason>`.
    #[must_use]
    pub fn status_line(&self) -> String {
        status::status_line(self.status)
    }

    /// ## Summary
    /// The body condensed for a log line.
    ///
    /// Whitespace runs collapse to one space and the result is cut to 100
    /// characters.
    #[must_use]
    pub fn log_message(&self) -> String {
        self.body
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .take(LOG_MESSAGE_LIMIT)
            .collect()
    }

    /// Logs this response as the end of a request.
    pub fn log_terminal(&self, caller: Option<i32>, path: &str) {
        let message = self.log_message();
        if self.status >= 500 {
            tracing::error!(status = self.status, caller, path, %message, "Request terminated");
        } else {
            tracing::info!(status = self.status, caller, path, %message, "Request terminated");
        }
    }
}

impl From<&ServiceError> for DavResponse {
    fn from(error: &ServiceError) -> Self {
        match error {
            ServiceError::IllegalPath(_) => {
                Self::text(400, "The calendar path contains illegal characters.")
            }
            ServiceError::InvalidHeader { name, .. } => Self::text(400, format!("Invalid {name} header")),
            ServiceError::MalformedBody(_) => Self::text(400, "Malformed XML request body"),
            ServiceError::DatabaseError(_) => Self::text(500, "Database Error"),
            ServiceError::RfcError(_) | ServiceError::CoreError(_) => {
                Self::text(500, "Internal Server Error")
            }
        }
    }
}
