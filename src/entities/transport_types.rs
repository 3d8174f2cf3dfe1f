use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transport_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transports::Entity")]
    Transports,
}

impl Related<super::transports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
