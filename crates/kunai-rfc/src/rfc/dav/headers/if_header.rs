//! `If` header (RFC 4918 §10.4).
//!
//! Only the lock tokens are pulled out. Entity tags and `Not` conditions are
//! kept in the raw value for handlers that want them.

use super::lock_token::OPAQUE_LOCK_TOKEN_SCHEME;

/// A parsed `If` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfHeader {
    /// The header value as received.
    pub raw: String,
    /// Lock tokens found in `<opaquelocktoken:...>` segments, in order.
    pub tokens: Vec<String>,
}

impl IfHeader {
    /// Parses the header. Returns `None` when absent.
    #[must_use]
    pub fn parse(header: Option<&str>) -> Option<Self> {
        let raw = header?;
        let tokens = raw
            .split('<')
            .skip(1)
            .filter_map(|segment| segment.split_once('>').map(|(inner, _)| inner.trim()))
            .filter_map(|inner| inner.strip_prefix(OPAQUE_LOCK_TOKEN_SCHEME))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(ToString::to_string)
            .collect();

        Some(Self {
            raw: raw.to_string(),
            tokens,
        })
    }

    /// Returns `true` when `token` appears as an `opaquelocktoken:` segment.
    #[must_use]
    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}
