use kunai_db::model::usr::Usr;

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub id: i32,
    pub name: String,
    pub is_admin: bool,
}

impl CallerIdentity {
    /// The caller as a plain identity.
    #[must_use]
    pub fn as_identity(&self) -> Identity {
        Identity {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl From<&Usr> for CallerIdentity {
    fn from(user: &Usr) -> Self {
        Self {
            id: user.user_no,
            name: user.username.clone(),
            is_admin: user.is_admin,
        }
    }
}

/// An identity addressed by a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i32,
    pub name: String,
}

impl From<&Usr> for Identity {
    fn from(user: &Usr) -> Self {
        Self {
            id: user.user_no,
            name: user.username.clone(),
        }
    }
}
