//! Activities a handler may ask the gate about.
//!
//! An activity names what the request wants to do. `PermissionSet::allowed_to`
//! decides whether the caller's capabilities cover it.

use std::fmt;

use kunai_rfc::rfc::dav::core::DavMethod;

use super::capability::{Capability, PermissionSet};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Activity {
    Read,
    Freebusy,
    Delete,
    Proppatch,
    /// Change the content of an existing resource.
    Modify,
    /// Create a new resource.
    Create,
    Mkcalendar,
    Mkcol,
    Lock,
    Unlock,
    /// Anything else, satisfied only by a capability of the same name.
    Other(String),
}

impl Activity {
    /// ## Summary
    /// The activity a method performs on its request path.
    ///
    /// `PUT` maps to `Modify` since the gate does not know whether the
    /// target exists. A handler creating a resource should check `Create`.
    /// `MOVE` removes its source and `COPY` reads it.
    #[must_use]
    pub fn for_method(method: &DavMethod) -> Self {
        match method {
            DavMethod::Options
            | DavMethod::Get
            | DavMethod::Head
            | DavMethod::Propfind
            | DavMethod::Report
            | DavMethod::Copy => Self::Read,
            DavMethod::Put => Self::Modify,
            DavMethod::Delete | DavMethod::Move => Self::Delete,
            DavMethod::Proppatch => Self::Proppatch,
            DavMethod::Mkcol => Self::Mkcol,
            DavMethod::Mkcalendar => Self::Mkcalendar,
            DavMethod::Lock => Self::Lock,
            DavMethod::Unlock => Self::Unlock,
            DavMethod::Other(name) => Self::Other(name.to_ascii_lowercase()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Read => "read",
            Self::Freebusy => "freebusy",
            Self::Delete => "delete",
            Self::Proppatch => "proppatch",
            Self::Modify => "modify",
            Self::Create => "create",
            Self::Mkcalendar => "mkcalendar",
            Self::Mkcol => "mkcol",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PermissionSet {
    /// ## Summary
    /// Whether the set permits `activity`.
    ///
    /// `all` permits everything. Composite activities accept either the broad
    /// `write` capability or the matching fine-grained one. `read`, `lock`,
    /// `unlock` and unknown activities need a capability of the same name, so
    /// `lock` and `unlock` are only ever permitted through `all`.
    #[must_use]
    pub fn allowed_to(self, activity: &Activity) -> bool {
        if self.is_all() {
            return true;
        }

        match activity {
            Activity::Freebusy => {
                self.contains(Capability::Read) || self.contains(Capability::Freebusy)
            }
            Activity::Delete => self.contains(Capability::Write) || self.contains(Capability::Unbind),
            Activity::Proppatch => {
                self.contains(Capability::Write) || self.contains(Capability::WriteProperties)
            }
            Activity::Modify => {
                self.contains(Capability::Write) || self.contains(Capability::WriteContent)
            }
            Activity::Create | Activity::Mkcalendar | Activity::Mkcol => {
                self.contains(Capability::Write) || self.contains(Capability::Bind)
            }
            Activity::Read => self.contains(Capability::Read),
            Activity::Lock | Activity::Unlock => false,
            Activity::Other(name) => {
                Capability::from_name(name).is_some_and(|capability| self.contains(capability))
            }
        }
    }
}
