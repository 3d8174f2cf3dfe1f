use crate::entities::{prelude::*, transport_types, transports};
use crate::models::transport::TransportType;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// Result of trying to delete a transport type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDeletion {
    Deleted,
    NotFound,
    /// Still referenced by this many transports; nothing was deleted.
    InUse(u64),
}

pub struct TransportTypeRepository {
    conn: DatabaseConnection,
}

impl From<transport_types::Model> for TransportType {
    fn from(model: transport_types::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl TransportTypeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<TransportType>> {
        let rows = TransportTypes::find()
            .order_by_asc(transport_types::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(TransportType::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<TransportType>> {
        let row = TransportTypes::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(TransportType::from))
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        let count = TransportTypes::find_by_id(id).count(&self.conn).await?;
        Ok(count > 0)
    }

    pub async fn create(&self, name: &str) -> Result<TransportType> {
        let model = transport_types::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        Ok(model.into())
    }

    pub async fn update(&self, id: i32, name: &str) -> Result<Option<TransportType>> {
        let txn = self.conn.begin().await?;

        let Some(existing) = TransportTypes::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: transport_types::ActiveModel = existing.into();
        active.name = Set(name.to_string());
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        Ok(Some(updated.into()))
    }

    pub async fn delete(&self, id: i32) -> Result<TypeDeletion> {
        let txn = self.conn.begin().await?;

        if TransportTypes::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(TypeDeletion::NotFound);
        }

        let references = Transports::find()
            .filter(transports::Column::TypeId.eq(id))
            .count(&txn)
            .await?;
        if references > 0 {
            return Ok(TypeDeletion::InUse(references));
        }

        TransportTypes::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(TypeDeletion::Deleted)
    }

    /// Returns the type with this name, creating it when absent.
    pub async fn find_or_create(&self, name: &str) -> Result<TransportType> {
        let existing = TransportTypes::find()
            .filter(transport_types::Column::Name.eq(name))
            .one(&self.conn)
            .await?;

        match existing {
            Some(model) => Ok(model.into()),
            None => self.create(name).await,
        }
    }
}
