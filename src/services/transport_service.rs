//! Domain service for transports.

use crate::forms::{BindMode, FieldErrors, Submission};
use crate::models::transport::Transport;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Transport not found: {0}")]
    NotFound(i32),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for TransportError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for TransportError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait TransportService: Send + Sync {
    async fn list(&self) -> Result<Vec<Transport>, TransportError>;

    async fn get(&self, id: i32) -> Result<Transport, TransportError>;

    /// Creates a transport; `number` and `type` are both required.
    async fn create(&self, submission: Submission) -> Result<Transport, TransportError>;

    /// `BindMode::Replace` clears fields missing from `submission`;
    /// `BindMode::Merge` keeps their current values.
    async fn update(
        &self,
        current: &Transport,
        submission: Submission,
        mode: BindMode,
    ) -> Result<Transport, TransportError>;

    /// Deletes the transport and drops it from every user's favorites.
    async fn delete(&self, id: i32) -> Result<(), TransportError>;
}
