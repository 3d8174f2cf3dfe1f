//! `SeaORM` implementation of the `TransportService` trait.

use crate::db::Store;
use crate::forms::transport::{TransportDraft, TransportInput};
use crate::forms::{BindMode, Submission};
use crate::models::transport::Transport;
use crate::services::transport_service::{TransportError, TransportService};
use async_trait::async_trait;
use tracing::{debug, info};

pub struct SeaOrmTransportService {
    store: Store,
}

impl SeaOrmTransportService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn validate(&self, draft: &TransportDraft) -> Result<TransportInput, TransportError> {
        let type_exists = match draft.type_id() {
            Some(type_id) => self.store.transport_type_exists(type_id).await?,
            None => false,
        };

        draft.validate(type_exists).map_err(TransportError::Validation)
    }
}

#[async_trait]
impl TransportService for SeaOrmTransportService {
    async fn list(&self) -> Result<Vec<Transport>, TransportError> {
        Ok(self.store.list_transports().await?)
    }

    async fn get(&self, id: i32) -> Result<Transport, TransportError> {
        self.store.get_transport(id).await?.ok_or_else(|| {
            debug!(id, "Transport not found");
            TransportError::NotFound(id)
        })
    }

    async fn create(&self, submission: Submission) -> Result<Transport, TransportError> {
        let draft = TransportDraft::bind(submission, None, BindMode::Replace);
        let input = self.validate(&draft).await?;

        let created = self.store.create_transport(input).await?;
        info!(
            id = created.id,
            number = created.number,
            type_id = created.type_id(),
            "Transport created"
        );

        Ok(created)
    }

    async fn update(
        &self,
        current: &Transport,
        submission: Submission,
        mode: BindMode,
    ) -> Result<Transport, TransportError> {
        let draft = TransportDraft::bind(submission, Some(current), mode);
        let input = self.validate(&draft).await?;

        let updated = self
            .store
            .update_transport(current.id, input)
            .await?
            .ok_or(TransportError::NotFound(current.id))?;
        info!(
            id = updated.id,
            number = updated.number,
            type_id = updated.type_id(),
            "Transport updated"
        );

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), TransportError> {
        if self.store.delete_transport(id).await? {
            info!(id, "Transport deleted");
            Ok(())
        } else {
            debug!(id, "Transport not found");
            Err(TransportError::NotFound(id))
        }
    }
}
