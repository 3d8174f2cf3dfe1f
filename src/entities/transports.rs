use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub number: i32,
    pub type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::transport_types::Entity",
        from = "Column::TypeId",
        to = "super::transport_types::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    TransportType,
    #[sea_orm(has_many = "super::favorite_transports::Entity")]
    FavoriteTransports,
}

impl Related<super::transport_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransportType.def()
    }
}

impl Related<super::favorite_transports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteTransports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
