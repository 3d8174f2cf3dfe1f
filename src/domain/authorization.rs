//! Capability checks consulted by HTTP handlers before touching a resource.

use std::collections::HashMap;

use super::{Permission, ROLE_ADMIN, ROLE_USER, ResourceKind};
use crate::models::user::User;

/// Decides whether a caller may perform `permission` on `resource`.
///
/// `caller` is `None` for anonymous requests.
pub trait Authorizer: Send + Sync {
    fn authorize(&self, caller: Option<&User>, permission: Permission, resource: ResourceKind)
    -> bool;
}

/// Policy table mapping `(resource, permission)` to the role required.
///
/// Pairs without an entry are denied.
#[derive(Debug, Clone)]
pub struct RoleAuthorizer {
    required: HashMap<(ResourceKind, Permission), String>,
}

impl RoleAuthorizer {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            required: HashMap::new(),
        }
    }

    #[must_use]
    pub fn require(
        mut self,
        resource: ResourceKind,
        permission: Permission,
        role: impl Into<String>,
    ) -> Self {
        self.required.insert((resource, permission), role.into());
        self
    }

    #[must_use]
    pub fn required_role(&self, resource: ResourceKind, permission: Permission) -> Option<&str> {
        self.required
            .get(&(resource, permission))
            .map(String::as_str)
    }
}

impl Default for RoleAuthorizer {
    /// Any user may view types; only admins change them or touch users
    /// and metrics.
    fn default() -> Self {
        let mut policy = Self::empty().require(ResourceKind::TransportType, Permission::View, ROLE_USER);

        for permission in [Permission::Create, Permission::Update, Permission::Delete] {
            policy = policy.require(ResourceKind::TransportType, permission, ROLE_ADMIN);
        }
        for permission in [
            Permission::View,
            Permission::Create,
            Permission::Update,
            Permission::Delete,
        ] {
            policy = policy.require(ResourceKind::User, permission, ROLE_ADMIN);
        }

        policy.require(ResourceKind::Metrics, Permission::View, ROLE_ADMIN)
    }
}

impl Authorizer for RoleAuthorizer {
    fn authorize(
        &self,
        caller: Option<&User>,
        permission: Permission,
        resource: ResourceKind,
    ) -> bool {
        let Some(user) = caller else {
            return false;
        };

        self.required_role(resource, permission)
            .is_some_and(|role| user.has_role(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: &[&str]) -> User {
        User::new(
            7,
            "driver@example.com".to_string(),
            roles.iter().map(|r| (*r).to_string()).collect(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        )
    }

    #[test]
    fn test_anonymous_is_denied() {
        let policy = RoleAuthorizer::default();
        assert!(!policy.authorize(None, Permission::View, ResourceKind::TransportType));
    }

    #[test]
    fn test_plain_user_can_only_view_types() {
        let policy = RoleAuthorizer::default();
        let plain = user(&[]);

        assert!(policy.authorize(Some(&plain), Permission::View, ResourceKind::TransportType));
        assert!(!policy.authorize(Some(&plain), Permission::Create, ResourceKind::TransportType));
        assert!(!policy.authorize(Some(&plain), Permission::Delete, ResourceKind::TransportType));
        assert!(!policy.authorize(Some(&plain), Permission::View, ResourceKind::User));
        assert!(!policy.authorize(Some(&plain), Permission::View, ResourceKind::Metrics));
    }

    #[test]
    fn test_admin_is_granted_everything_in_default_policy() {
        let policy = RoleAuthorizer::default();
        let admin = user(&[ROLE_ADMIN]);

        for permission in [
            Permission::View,
            Permission::Create,
            Permission::Update,
            Permission::Delete,
        ] {
            assert!(policy.authorize(Some(&admin), permission, ResourceKind::TransportType));
            assert!(policy.authorize(Some(&admin), permission, ResourceKind::User));
        }
    }

    #[test]
    fn test_missing_entry_is_denied() {
        let policy = RoleAuthorizer::empty().require(
            ResourceKind::TransportType,
            Permission::View,
            "ROLE_DISPATCHER",
        );
        let dispatcher = user(&["ROLE_DISPATCHER"]);

        assert!(policy.authorize(Some(&dispatcher), Permission::View, ResourceKind::TransportType));
        assert!(!policy.authorize(Some(&dispatcher), Permission::Update, ResourceKind::TransportType));
    }
}
