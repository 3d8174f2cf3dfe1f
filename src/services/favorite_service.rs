//! The caller's favorite transports.
//!
//! Favorites form a set: adding a member again or removing a non-member
//! succeeds without changing anything.

use crate::forms::{FieldErrors, Submission};
use crate::models::transport::Transport;
use crate::models::user::User;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FavoriteError {
    /// The referenced transport does not exist.
    #[error("Transport not found")]
    TransportNotFound,

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for FavoriteError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for FavoriteError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait FavoriteService: Send + Sync {
    async fn list(&self, user: &User) -> Result<Vec<Transport>, FavoriteError>;

    /// Adds the transport named by the submission's `transport` key.
    async fn add(&self, user: &User, submission: Submission) -> Result<(), FavoriteError>;

    async fn remove(&self, user: &User, transport_id: i32) -> Result<(), FavoriteError>;
}
