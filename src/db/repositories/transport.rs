use crate::entities::{favorite_transports, prelude::*, transport_types, transports};
use crate::forms::transport::TransportInput;
use crate::models::transport::Transport;
use anyhow::{Result, anyhow};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

pub struct TransportRepository {
    conn: DatabaseConnection,
}

impl TransportRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub(crate) fn map_row(
        transport: transports::Model,
        kind: Option<transport_types::Model>,
    ) -> Result<Transport> {
        let kind = kind.ok_or_else(|| {
            anyhow!(
                "Transport {} references missing type {}",
                transport.id,
                transport.type_id
            )
        })?;

        Ok(Transport {
            id: transport.id,
            number: transport.number,
            transport_type: kind.into(),
        })
    }

    pub async fn list(&self) -> Result<Vec<Transport>> {
        let rows = Transports::find()
            .order_by_asc(transports::Column::Id)
            .find_also_related(TransportTypes)
            .all(&self.conn)
            .await?;

        rows.into_iter()
            .map(|(transport, kind)| Self::map_row(transport, kind))
            .collect()
    }

    pub async fn get(&self, id: i32) -> Result<Option<Transport>> {
        let row = Transports::find_by_id(id)
            .find_also_related(TransportTypes)
            .one(&self.conn)
            .await?;

        row.map(|(transport, kind)| Self::map_row(transport, kind))
            .transpose()
    }

    pub async fn create(&self, input: TransportInput) -> Result<Transport> {
        let txn = self.conn.begin().await?;

        let model = transports::ActiveModel {
            number: Set(input.number),
            type_id: Set(input.type_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        let transport = Self::with_type(&txn, model).await?;

        txn.commit().await?;
        Ok(transport)
    }

    pub async fn update(&self, id: i32, input: TransportInput) -> Result<Option<Transport>> {
        let txn = self.conn.begin().await?;

        let Some(existing) = Transports::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: transports::ActiveModel = existing.into();
        active.number = Set(input.number);
        active.type_id = Set(input.type_id);
        let updated = active.update(&txn).await?;
        let transport = Self::with_type(&txn, updated).await?;

        txn.commit().await?;
        Ok(Some(transport))
    }

    /// Deletes the transport and every favorite pointing at it.
    /// Returns false when there was nothing to delete.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let txn = self.conn.begin().await?;

        FavoriteTransports::delete_many()
            .filter(favorite_transports::Column::TransportId.eq(id))
            .exec(&txn)
            .await?;
        let result = Transports::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    async fn with_type<C: ConnectionTrait>(conn: &C, model: transports::Model) -> Result<Transport> {
        let kind = TransportTypes::find_by_id(model.type_id).one(conn).await?;
        Self::map_row(model, kind)
    }
}
