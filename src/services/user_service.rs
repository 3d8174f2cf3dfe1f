//! Domain service for user accounts and API tokens.

use crate::forms::{FieldErrors, Submission};
use crate::models::user::User;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("A user with email '{0}' already exists")]
    EmailTaken(String),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Resolves an API token to its owner. Unknown tokens yield `None`.
    async fn resolve_token(&self, token: &str) -> Result<Option<User>, UserError>;

    async fn list(&self) -> Result<Vec<User>, UserError>;

    async fn get(&self, id: i32) -> Result<User, UserError>;

    async fn get_by_email(&self, email: &str) -> Result<User, UserError>;

    /// Registers a user. Roles are stored as given; `ROLE_USER` is implied.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::Validation`] for an empty email, bad role names
    /// or a short password, and [`UserError::EmailTaken`] for duplicates.
    async fn create(
        &self,
        email: &str,
        password: &str,
        roles: Vec<String>,
    ) -> Result<User, UserError>;

    /// Applies `roles` and/or `password` from the submission.
    async fn update_account(&self, current: &User, submission: Submission)
    -> Result<User, UserError>;

    async fn regenerate_token(&self, id: i32) -> Result<User, UserError>;
}
