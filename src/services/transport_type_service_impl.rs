//! `SeaORM` implementation of the `TransportTypeService` trait.

use crate::db::{Store, TypeDeletion};
use crate::forms::transport_type::TransportTypeDraft;
use crate::forms::{BindMode, Submission};
use crate::models::transport::TransportType;
use crate::services::transport_type_service::{TransportTypeError, TransportTypeService};
use async_trait::async_trait;
use tracing::{debug, info};

pub struct SeaOrmTransportTypeService {
    store: Store,
}

impl SeaOrmTransportTypeService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TransportTypeService for SeaOrmTransportTypeService {
    async fn list(&self) -> Result<Vec<TransportType>, TransportTypeError> {
        Ok(self.store.list_transport_types().await?)
    }

    async fn get(&self, id: i32) -> Result<TransportType, TransportTypeError> {
        self.store.get_transport_type(id).await?.ok_or_else(|| {
            debug!(id, "Transport type not found");
            TransportTypeError::NotFound(id)
        })
    }

    async fn create(&self, submission: Submission) -> Result<TransportType, TransportTypeError> {
        let input = TransportTypeDraft::bind(submission, None, BindMode::Replace)
            .validate()
            .map_err(TransportTypeError::Validation)?;

        let created = self.store.create_transport_type(&input.name).await?;
        info!(id = created.id, name = %created.name, "Transport type created");

        Ok(created)
    }

    async fn update(
        &self,
        current: &TransportType,
        submission: Submission,
        mode: BindMode,
    ) -> Result<TransportType, TransportTypeError> {
        let input = TransportTypeDraft::bind(submission, Some(current), mode)
            .validate()
            .map_err(TransportTypeError::Validation)?;

        let updated = self
            .store
            .update_transport_type(current.id, &input.name)
            .await?
            .ok_or(TransportTypeError::NotFound(current.id))?;
        info!(id = updated.id, name = %updated.name, "Transport type updated");

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), TransportTypeError> {
        match self.store.delete_transport_type(id).await? {
            TypeDeletion::Deleted => {
                info!(id, "Transport type deleted");
                Ok(())
            }
            TypeDeletion::NotFound => {
                debug!(id, "Transport type not found");
                Err(TransportTypeError::NotFound(id))
            }
            TypeDeletion::InUse(transports) => {
                debug!(id, transports, "Transport type still referenced");
                Err(TransportTypeError::InUse { id, transports })
            }
        }
    }
}
