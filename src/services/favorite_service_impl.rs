//! `SeaORM` implementation of the `FavoriteService` trait.

use crate::db::Store;
use crate::forms::Submission;
use crate::forms::favorite::{FavoriteDraft, TransportRef};
use crate::models::transport::Transport;
use crate::models::user::User;
use crate::services::favorite_service::{FavoriteError, FavoriteService};
use async_trait::async_trait;
use tracing::{debug, info};

pub struct SeaOrmFavoriteService {
    store: Store,
}

impl SeaOrmFavoriteService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FavoriteService for SeaOrmFavoriteService {
    async fn list(&self, user: &User) -> Result<Vec<Transport>, FavoriteError> {
        Ok(self.store.list_favorites(user.id).await?)
    }

    async fn add(&self, user: &User, submission: Submission) -> Result<(), FavoriteError> {
        let reference = FavoriteDraft::bind(submission)
            .validate()
            .map_err(FavoriteError::Validation)?;

        let TransportRef::Id(transport_id) = reference else {
            debug!(user_id = user.id, "Favorite add with unresolvable transport");
            return Err(FavoriteError::TransportNotFound);
        };

        if !self.store.add_favorite(user.id, transport_id).await? {
            debug!(user_id = user.id, transport_id, "Transport not found");
            return Err(FavoriteError::TransportNotFound);
        }

        info!(user_id = user.id, transport_id, "Favorite added");
        Ok(())
    }

    async fn remove(&self, user: &User, transport_id: i32) -> Result<(), FavoriteError> {
        if !self.store.remove_favorite(user.id, transport_id).await? {
            debug!(user_id = user.id, transport_id, "Transport not found");
            return Err(FavoriteError::TransportNotFound);
        }

        info!(user_id = user.id, transport_id, "Favorite removed");
        Ok(())
    }
}
