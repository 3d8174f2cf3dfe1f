use crate::domain::ROLE_USER;

/// A user as loaded from the store.
///
/// Stored roles may omit `ROLE_USER`; [`User::roles`] always includes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,

    pub email: String,

    stored_roles: Vec<String>,

    pub password_hash: String,

    pub api_token: String,

    pub created_at: String,

    pub updated_at: String,
}

impl User {
    #[must_use]
    pub const fn new(
        id: i32,
        email: String,
        stored_roles: Vec<String>,
        password_hash: String,
        api_token: String,
        created_at: String,
        updated_at: String,
    ) -> Self {
        Self {
            id,
            email,
            stored_roles,
            password_hash,
            api_token,
            created_at,
            updated_at,
        }
    }

    /// Roles granted to this user, deduplicated, always containing `ROLE_USER`.
    #[must_use]
    pub fn roles(&self) -> Vec<String> {
        effective_roles(&self.stored_roles)
    }

    #[must_use]
    pub fn stored_roles(&self) -> &[String] {
        &self.stored_roles
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        role == ROLE_USER || self.stored_roles.iter().any(|r| r == role)
    }
}

/// Keeps first-seen order and appends `ROLE_USER` when it is missing.
#[must_use]
pub fn effective_roles(stored: &[String]) -> Vec<String> {
    let mut roles: Vec<String> = Vec::with_capacity(stored.len() + 1);
    for role in stored.iter().map(String::as_str).chain(std::iter::once(ROLE_USER)) {
        if !roles.iter().any(|r| r == role) {
            roles.push(role.to_string());
        }
    }
    roles
}
