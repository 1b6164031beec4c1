//! Depth header values.

use std::fmt;

use super::method::DavMethod;
use crate::error::{RfcError, RfcResult};

/// `WebDAV` Depth header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Depth: 0 - The resource itself only.
    Zero,
    /// Depth: 1 - The resource and its immediate children.
    One,
    /// Depth: infinity - The resource and all descendants.
    Infinity,
}

impl Depth {
    /// ## Summary
    /// Resolves the effective depth for a request (RFC 2518 §9.2).
    ///
    /// An absent header takes the method default. Integers are coerced onto
    /// the legal values: `0` stays `Zero`, any positive value becomes `One`.
    ///
    /// ## Errors
    /// Returns `InvalidHeader` for negative or non-numeric values.
    pub fn for_request(header: Option<&str>, method: &DavMethod) -> RfcResult<Self> {
        let Some(raw) = header else {
            return Ok(method.default_depth());
        };

        let value = raw.trim();
        if value.eq_ignore_ascii_case("infinity") {
            return Ok(Self::Infinity);
        }

        match value.parse::<i64>() {
            Ok(0) => Ok(Self::Zero),
            Ok(n) if n > 0 => Ok(Self::One),
            _ => Err(RfcError::InvalidHeader {
                name: "Depth",
                value: raw.to_string(),
            }),
        }
    }

    /// Returns `true` for `Depth: infinity`.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Returns the header value string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Infinity => "infinity",
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
