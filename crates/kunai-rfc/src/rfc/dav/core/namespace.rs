//! XML namespace and qualified name types.

use std::borrow::Cow;

/// `DAV:` namespace URI.
pub const DAV_NS: &str = "DAV:";

/// `CalDAV` namespace URI.
pub const CALDAV_NS: &str = "urn:ietf:params:xml:ns:caldav";

/// An XML namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(pub Cow<'static, str>);

impl Namespace {
    /// `DAV:` namespace.
    pub const DAV: Self = Self(Cow::Borrowed(DAV_NS));

    /// `CalDAV` namespace.
    pub const CALDAV: Self = Self(Cow::Borrowed(CALDAV_NS));

    /// Creates a new namespace from a string.
    #[must_use]
    pub fn new(uri: impl Into<Cow<'static, str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the conventional prefix for this namespace.
    #[must_use]
    pub fn default_prefix(&self) -> Option<&'static str> {
        match self.0.as_ref() {
            DAV_NS => Some("D"),
            CALDAV_NS => Some("C"),
            _ => None,
        }
    }
}

impl From<&'static str> for Namespace {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for Namespace {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

/// A qualified XML name (namespace + local name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// The namespace URI.
    pub namespace: Namespace,
    /// The local name.
    pub local_name: Cow<'static, str>,
}

impl QName {
    /// Creates a new qualified name.
    #[must_use]
    pub fn new(namespace: impl Into<Namespace>, local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Creates a `DAV:` qualified name.
    #[must_use]
    pub fn dav(local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Namespace::DAV,
            local_name: local_name.into(),
        }
    }

    /// Creates a `CalDAV` qualified name.
    #[must_use]
    pub fn caldav(local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Namespace::CALDAV,
            local_name: local_name.into(),
        }
    }

    /// ## Summary
    /// Parses Clark notation (`{namespace}local`). A bare name lands in `DAV:`.
    #[must_use]
    pub fn from_clark(name: &str) -> Self {
        match name
            .strip_prefix('{')
            .and_then(|rest| rest.split_once('}'))
        {
            Some((ns, local)) => Self::new(ns.to_string(), local.to_string()),
            None => Self::dav(name.to_string()),
        }
    }

    /// Returns the local name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn namespace_uri(&self) -> &str {
        self.namespace.as_str()
    }

    /// Returns whether this is a DAV: element.
    #[must_use]
    pub fn is_dav(&self) -> bool {
        self.namespace == Namespace::DAV
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}{}", self.namespace.as_str(), self.local_name)
    }
}

/// DAV property names used by the gate.
pub mod dav_props {
    use super::QName;

    #[must_use]
    pub fn lockdiscovery() -> QName {
        QName::dav("lockdiscovery")
    }

    #[must_use]
    pub fn supported_privilege_set() -> QName {
        QName::dav("supported-privilege-set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clark_notation_round_trips_through_display() {
        let name = QName::from_clark("{urn:ietf:params:xml:ns:caldav}calendar-data");
        assert_eq!(name.namespace, Namespace::CALDAV);
        assert_eq!(name.local_name(), "calendar-data");
        assert_eq!(
            name.to_string(),
            "{urn:ietf:params:xml:ns:caldav}calendar-data"
        );
    }

    #[test]
    fn bare_name_defaults_to_dav() {
        let name = QName::from_clark("getetag");
        assert!(name.is_dav());
        assert_eq!(name.local_name(), "getetag");
    }

    #[test]
    fn prefixes() {
        assert_eq!(Namespace::DAV.default_prefix(), Some("D"));
        assert_eq!(Namespace::CALDAV.default_prefix(), Some("C"));
        assert_eq!(Namespace::new("http://example.com/ns/").default_prefix(), None);
    }
}
