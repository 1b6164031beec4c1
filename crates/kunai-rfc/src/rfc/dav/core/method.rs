//! Request methods the gate distinguishes.

use std::fmt;

use super::depth::Depth;

/// HTTP methods relevant to `WebDAV`/`CalDAV` access control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DavMethod {
    Options,
    Get,
    Head,
    Put,
    Delete,
    Propfind,
    Proppatch,
    Mkcol,
    Mkcalendar,
    Copy,
    Move,
    Report,
    Lock,
    Unlock,
    /// Any other verb, upper-cased.
    Other(String),
}

impl DavMethod {
    /// Parse an HTTP method string. Unknown verbs are kept as `Other`.
    #[must_use]
    pub fn parse(method: &str) -> Self {
        match method.to_ascii_uppercase().as_str() {
            "OPTIONS" => Self::Options,
            "GET" => Self::Get,
            "HEAD" => Self::Head,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            "PROPFIND" => Self::Propfind,
            "PROPPATCH" => Self::Proppatch,
            "MKCOL" => Self::Mkcol,
            "MKCALENDAR" => Self::Mkcalendar,
            "COPY" => Self::Copy,
            "MOVE" => Self::Move,
            "REPORT" => Self::Report,
            "LOCK" => Self::Lock,
            "UNLOCK" => Self::Unlock,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the method token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Options => "OPTIONS",
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Propfind => "PROPFIND",
            Self::Proppatch => "PROPPATCH",
            Self::Mkcol => "MKCOL",
            Self::Mkcalendar => "MKCALENDAR",
            Self::Copy => "COPY",
            Self::Move => "MOVE",
            Self::Report => "REPORT",
            Self::Lock => "LOCK",
            Self::Unlock => "UNLOCK",
            Self::Other(other) => other,
        }
    }

    /// ## Summary
    /// Depth assumed when the request carries no `Depth` header.
    ///
    /// RFC 2518 §9.2 leaves this to the method: PROPFIND, DELETE, MOVE, COPY
    /// and LOCK act on whole subtrees, everything else on the resource only.
    #[must_use]
    pub const fn default_depth(&self) -> Depth {
        match self {
            Self::Propfind | Self::Delete | Self::Move | Self::Copy | Self::Lock => {
                Depth::Infinity
            }
            _ => Depth::Zero,
        }
    }

    /// Returns `true` for methods that change server state.
    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(
            self,
            Self::Put
                | Self::Delete
                | Self::Proppatch
                | Self::Mkcol
                | Self::Mkcalendar
                | Self::Copy
                | Self::Move
                | Self::Lock
                | Self::Unlock
        )
    }
}

impl fmt::Display for DavMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
