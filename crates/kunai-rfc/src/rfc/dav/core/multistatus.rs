//! Multistatus response types.

use super::href::Href;
use super::namespace::QName;
use super::status;

/// A multistatus response (RFC 4918 §13).
#[derive(Debug, Clone, Default)]
pub struct Multistatus {
    /// Individual responses.
    pub responses: Vec<PropstatResponse>,
    /// Optional response description.
    pub description: Option<String>,
}

impl Multistatus {
    /// Creates an empty multistatus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a response.
    pub fn add_response(&mut self, response: PropstatResponse) {
        self.responses.push(response);
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// A single response within a multistatus.
///
/// Carries either a response-level `status` or a list of propstats.
#[derive(Debug, Clone)]
pub struct PropstatResponse {
    /// The resource href.
    pub href: Href,
    /// Response-level status.
    pub status: Option<Status>,
    /// Property statuses grouped by status code.
    pub propstats: Vec<Propstat>,
    /// Optional response description.
    pub description: Option<String>,
}

impl PropstatResponse {
    /// Creates a response for a resource.
    #[must_use]
    pub fn new(href: impl Into<Href>) -> Self {
        Self {
            href: href.into(),
            status: None,
            propstats: Vec::new(),
            description: None,
        }
    }

    /// Creates a response carrying only a status.
    #[must_use]
    pub fn with_status(href: impl Into<Href>, status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::new(href)
        }
    }

    /// Adds a propstat to the response.
    pub fn add_propstat(&mut self, propstat: Propstat) {
        self.propstats.push(propstat);
    }
}

/// Property status grouping.
#[derive(Debug, Clone)]
pub struct Propstat {
    /// HTTP status.
    pub status: Status,
    /// Properties with this status, rendered as empty elements.
    pub properties: Vec<QName>,
    /// Property elements already serialized, written as-is after `properties`.
    pub values: Vec<String>,
    /// Optional description.
    pub description: Option<String>,
}

impl Propstat {
    /// Creates a new propstat.
    #[must_use]
    pub fn new(status: Status, properties: Vec<QName>) -> Self {
        Self {
            status,
            properties,
            values: Vec::new(),
            description: None,
        }
    }

    /// Adds a serialized property element.
    #[must_use]
    pub fn with_value(mut self, xml: String) -> Self {
        self.values.push(xml);
        self
    }
}

/// HTTP status inside a multistatus body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 412 Precondition Failed
    PreconditionFailed,
    /// 423 Locked
    Locked,
    /// 424 Failed Dependency
    FailedDependency,
    /// Custom status
    Custom(u16),
}

impl Status {
    /// Returns the status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::PreconditionFailed => 412,
            Self::Locked => 423,
            Self::FailedDependency => 424,
            Self::Custom(code) => *code,
        }
    }

    /// Returns the status line.
    #[must_use]
    pub fn status_line(&self) -> String {
        status::status_line(self.code())
    }

    /// Returns the reason phrase.
    #[must_use]
    pub fn reason_phrase(&self) -> &'static str {
        status::reason_phrase(self.code())
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        match code {
            200 => Self::Ok,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            412 => Self::PreconditionFailed,
            423 => Self::Locked,
            424 => Self::FailedDependency,
            _ => Self::Custom(code),
        }
    }
}
