use crate::auth::Identity;
use crate::model::Role;

/// Point-in-time view of who is signed in and as what.
///
/// `loading` is true only before the provider has reported for the first
/// time. A signed-in snapshot without a role means the profile has not been
/// found yet; it is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub loading: bool,
    pub identity: Option<Identity>,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl SessionSnapshot {
    pub fn pending() -> Self {
        Self {
            loading: true,
            identity: None,
            name: None,
            role: None,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            loading: false,
            ..Self::pending()
        }
    }

    /// Blank name and role tags are treated as absent.
    pub fn signed_in(identity: Identity, name: Option<String>, role: Option<String>) -> Self {
        Self {
            loading: false,
            identity: Some(identity),
            name: name.filter(|n| !n.is_empty()),
            role: role.filter(|r| !r.is_empty()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.identity.is_some()
    }

    /// Signed in, but the profile (and so the role) is not known yet.
    pub fn awaiting_profile(&self) -> bool {
        self.identity.is_some() && self.role.is_none()
    }

    pub fn role_tag(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// The role, when the stored tag is one of the known set.
    pub fn role(&self) -> Option<Role> {
        self.role_tag().and_then(|tag| tag.parse().ok())
    }
}
