use crate::config::SecurityConfig;
use crate::forms::transport::TransportInput;
use crate::models::transport::{Transport, TransportType};
use crate::models::user::User;
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::transport_type::TypeDeletion;
pub use repositories::user::{generate_api_key, hash_password};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent).await?;
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn transport_type_repo(&self) -> repositories::transport_type::TransportTypeRepository {
        repositories::transport_type::TransportTypeRepository::new(self.conn.clone())
    }

    fn transport_repo(&self) -> repositories::transport::TransportRepository {
        repositories::transport::TransportRepository::new(self.conn.clone())
    }

    fn favorite_repo(&self) -> repositories::favorite::FavoriteRepository {
        repositories::favorite::FavoriteRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    pub async fn list_transport_types(&self) -> Result<Vec<TransportType>> {
        self.transport_type_repo().list().await
    }

    pub async fn get_transport_type(&self, id: i32) -> Result<Option<TransportType>> {
        self.transport_type_repo().get(id).await
    }

    pub async fn transport_type_exists(&self, id: i32) -> Result<bool> {
        self.transport_type_repo().exists(id).await
    }

    pub async fn create_transport_type(&self, name: &str) -> Result<TransportType> {
        self.transport_type_repo().create(name).await
    }

    pub async fn find_or_create_transport_type(&self, name: &str) -> Result<TransportType> {
        self.transport_type_repo().find_or_create(name).await
    }

    pub async fn update_transport_type(
        &self,
        id: i32,
        name: &str,
    ) -> Result<Option<TransportType>> {
        self.transport_type_repo().update(id, name).await
    }

    pub async fn delete_transport_type(&self, id: i32) -> Result<TypeDeletion> {
        self.transport_type_repo().delete(id).await
    }

    pub async fn list_transports(&self) -> Result<Vec<Transport>> {
        self.transport_repo().list().await
    }

    pub async fn get_transport(&self, id: i32) -> Result<Option<Transport>> {
        self.transport_repo().get(id).await
    }

    pub async fn create_transport(&self, input: TransportInput) -> Result<Transport> {
        self.transport_repo().create(input).await
    }

    pub async fn update_transport(
        &self,
        id: i32,
        input: TransportInput,
    ) -> Result<Option<Transport>> {
        self.transport_repo().update(id, input).await
    }

    pub async fn delete_transport(&self, id: i32) -> Result<bool> {
        self.transport_repo().delete(id).await
    }

    pub async fn list_favorites(&self, user_id: i32) -> Result<Vec<Transport>> {
        self.favorite_repo().list(user_id).await
    }

    pub async fn add_favorite(&self, user_id: i32, transport_id: i32) -> Result<bool> {
        self.favorite_repo().add(user_id, transport_id).await
    }

    pub async fn remove_favorite(&self, user_id: i32, transport_id: i32) -> Result<bool> {
        self.favorite_repo().remove(user_id, transport_id).await
    }

    pub async fn is_favorite(&self, user_id: i32, transport_id: i32) -> Result<bool> {
        self.favorite_repo().contains(user_id, transport_id).await
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.user_repo().get_by_email(email).await
    }

    pub async fn get_user_by_api_token(&self, token: &str) -> Result<Option<User>> {
        self.user_repo().get_by_api_token(token).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.user_repo().list().await
    }

    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        roles: &[String],
        security: &SecurityConfig,
    ) -> Result<User> {
        self.user_repo()
            .create(email, password, roles, security)
            .await
    }

    pub async fn update_user_account(
        &self,
        id: i32,
        roles: Option<&[String]>,
        password: Option<&str>,
        security: &SecurityConfig,
    ) -> Result<Option<User>> {
        self.user_repo()
            .update_account(id, roles, password, security)
            .await
    }

    pub async fn regenerate_user_token(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().regenerate_api_token(id).await
    }
}
