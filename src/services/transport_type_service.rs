//! Domain service for transport types.

use crate::forms::{BindMode, FieldErrors, Submission};
use crate::models::transport::TransportType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportTypeError {
    #[error("Transport type not found: {0}")]
    NotFound(i32),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Transport type {id} is used by {transports} transport(s)")]
    InUse { id: i32, transports: u64 },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for TransportTypeError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for TransportTypeError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait TransportTypeService: Send + Sync {
    /// All types, ordered by id.
    async fn list(&self) -> Result<Vec<TransportType>, TransportTypeError>;

    async fn get(&self, id: i32) -> Result<TransportType, TransportTypeError>;

    async fn create(&self, submission: Submission) -> Result<TransportType, TransportTypeError>;

    /// Binds `submission` onto `current` and stores the result.
    async fn update(
        &self,
        current: &TransportType,
        submission: Submission,
        mode: BindMode,
    ) -> Result<TransportType, TransportTypeError>;

    /// # Errors
    ///
    /// Returns [`TransportTypeError::InUse`] while any transport still
    /// references the type.
    async fn delete(&self, id: i32) -> Result<(), TransportTypeError>;
}
