//! User account command handlers

use crate::api::projection::{ExposureGroup, UserDto};
use crate::config::Config;
use crate::db::Store;
use crate::services::{SeaOrmUserService, UserService};

async fn user_service(config: &Config) -> anyhow::Result<SeaOrmUserService> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    Ok(SeaOrmUserService::new(store, config.security.clone()))
}

pub async fn cmd_user_add(
    config: &Config,
    email: &str,
    password: &str,
    roles: Vec<String>,
) -> anyhow::Result<()> {
    let service = user_service(config).await?;
    let user = service.create(email, password, roles).await?;

    println!("✓ Created user {} (ID: {})", user.email, user.id);
    println!("  Roles: {}", user.roles().join(", "));
    println!("  API token: {}", user.api_token);

    Ok(())
}

pub async fn cmd_user_list(config: &Config) -> anyhow::Result<()> {
    let service = user_service(config).await?;
    let users = service.list().await?;

    if users.is_empty() {
        println!("No users.");
        return Ok(());
    }

    println!("Users ({} total)", users.len());
    println!("{:-<60}", "");

    for user in &users {
        let dto = UserDto::project(user, ExposureGroup::Public);
        println!("{}", serde_json::to_string(&dto)?);
    }

    Ok(())
}

pub async fn cmd_user_token(config: &Config, email: &str) -> anyhow::Result<()> {
    let service = user_service(config).await?;
    let user = service.get_by_email(email).await?;
    let user = service.regenerate_token(user.id).await?;

    println!("✓ New API token for {}:", user.email);
    println!("  {}", user.api_token);

    Ok(())
}
