use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub email: String,

    /// JSON array of role names, as stored (may omit `ROLE_USER`)
    pub roles: String,

    /// Argon2id password hash
    pub password_hash: String,

    /// Bearer credential sent in the API token header
    #[sea_orm(unique)]
    pub api_token: String,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_transports::Entity")]
    FavoriteTransports,
}

impl Related<super::favorite_transports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteTransports.def()
    }
}

impl Related<super::transports::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_transports::Relation::Transport.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_transports::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
