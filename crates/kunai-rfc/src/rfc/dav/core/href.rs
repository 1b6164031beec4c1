//! DAV href type.

use std::fmt;

use kunai_core::constants::DAV_ROUTE_PREFIX;

/// A `WebDAV` href (URL reference).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Href(pub String);

impl Href {
    /// Creates a new href.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// ## Summary
    /// Builds the client-visible href for a path below the service root.
    ///
    /// `/alice/cal/` becomes `/dav/alice/cal/`.
    #[must_use]
    pub fn for_dav_path(path: &str) -> Self {
        let relative = path.trim_start_matches('/');
        Self(format!("{DAV_ROUTE_PREFIX}/{relative}"))
    }

    /// Returns the href as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this href ends with a slash.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.0.ends_with('/')
    }
}

impl From<&str> for Href {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Href {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dav_path_is_prefixed_with_service_root() {
        assert_eq!(Href::for_dav_path("/alice/cal/").as_str(), "/dav/alice/cal/");
        assert_eq!(Href::for_dav_path("/").as_str(), "/dav/");
    }

    #[test]
    fn collection_detection() {
        assert!(Href::new("/dav/alice/").is_collection());
        assert!(!Href::new("/dav/alice/cal/x.ics").is_collection());
    }
}
