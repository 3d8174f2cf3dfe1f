use super::transport::TransportRepository;
use crate::entities::{favorite_transports, prelude::*, transports};
use crate::models::transport::Transport;
use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set, TransactionTrait, sea_query::JoinType,
};

pub struct FavoriteRepository {
    conn: DatabaseConnection,
}

impl FavoriteRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Transport>> {
        let rows = Transports::find()
            .join(
                JoinType::InnerJoin,
                transports::Relation::FavoriteTransports.def(),
            )
            .filter(favorite_transports::Column::UserId.eq(user_id))
            .order_by_asc(transports::Column::Id)
            .find_also_related(TransportTypes)
            .all(&self.conn)
            .await?;

        rows.into_iter()
            .map(|(transport, kind)| TransportRepository::map_row(transport, kind))
            .collect()
    }

    /// Adds the transport to the user's favorites. Adding an existing
    /// favorite is a no-op. Returns false when the transport does not exist.
    pub async fn add(&self, user_id: i32, transport_id: i32) -> Result<bool> {
        let txn = self.conn.begin().await?;

        if Transports::find_by_id(transport_id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        FavoriteTransports::insert(favorite_transports::ActiveModel {
            user_id: Set(user_id),
            transport_id: Set(transport_id),
        })
        .on_conflict(
            sea_orm::sea_query::OnConflict::columns([
                favorite_transports::Column::UserId,
                favorite_transports::Column::TransportId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        txn.commit().await?;
        Ok(true)
    }

    /// Removes the transport from the user's favorites if present.
    /// Returns false when the transport does not exist.
    pub async fn remove(&self, user_id: i32, transport_id: i32) -> Result<bool> {
        let txn = self.conn.begin().await?;

        if Transports::find_by_id(transport_id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        FavoriteTransports::delete_many()
            .filter(favorite_transports::Column::UserId.eq(user_id))
            .filter(favorite_transports::Column::TransportId.eq(transport_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(true)
    }

    pub async fn contains(&self, user_id: i32, transport_id: i32) -> Result<bool> {
        let row = FavoriteTransports::find_by_id((user_id, transport_id))
            .one(&self.conn)
            .await?;
        Ok(row.is_some())
    }
}
