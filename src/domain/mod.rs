//! Domain vocabulary shared by the store, services and HTTP layer.
//!
//! Role names, permissions and resource kinds used by authorization checks.

pub mod authorization;

pub use authorization::{Authorizer, RoleAuthorizer};

use std::fmt;

/// Granted to every user, whether or not it is stored.
pub const ROLE_USER: &str = "ROLE_USER";

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Action a caller attempts on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    View,
    Create,
    Update,
    Delete,
}

impl Permission {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of resource an authorization check is made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    TransportType,
    User,
    Metrics,
}

impl ResourceKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TransportType => "transport_type",
            Self::User => "user",
            Self::Metrics => "metrics",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `role` is a well-formed role name (`ROLE_` followed by
/// uppercase letters, digits or underscores).
#[must_use]
pub fn is_valid_role_name(role: &str) -> bool {
    role.strip_prefix("ROLE_").is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    })
}
