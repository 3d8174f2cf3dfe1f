use crate::entities::{prelude::*, users};
use crate::domain::ROLE_ADMIN;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@depot.local";

/// Well-known token of the bootstrap admin; rotate it after first login.
pub const DEFAULT_API_TOKEN: &str = "depot_default_api_token_please_regenerate";

const DEFAULT_PASSWORD: &str = "password";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let password_hash = crate::db::hash_password(DEFAULT_PASSWORD, None)
            .map_err(|e| DbErr::Custom(format!("Failed to hash default password: {e}")))?;
        let roles = serde_json::to_string(&[ROLE_ADMIN])
            .map_err(|e| DbErr::Custom(format!("Failed to encode default roles: {e}")))?;
        let now = chrono::Utc::now().to_rfc3339();

        let insert = Query::insert()
            .into_table(Users)
            .columns([
                users::Column::Email,
                users::Column::Roles,
                users::Column::PasswordHash,
                users::Column::ApiToken,
                users::Column::CreatedAt,
                users::Column::UpdatedAt,
            ])
            .values_panic([
                DEFAULT_ADMIN_EMAIL.into(),
                roles.into(),
                password_hash.into(),
                DEFAULT_API_TOKEN.into(),
                now.clone().into(),
                now.into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Users)
            .and_where(Expr::col(users::Column::Email).eq(DEFAULT_ADMIN_EMAIL))
            .to_owned();

        manager.exec_stmt(delete).await?;

        Ok(())
    }
}
