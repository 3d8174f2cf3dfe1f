use anyhow::{Context, Result};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tokio::task;

use crate::config::SecurityConfig;
use crate::entities::users;
use crate::models::user::User;

impl TryFrom<users::Model> for User {
    type Error = anyhow::Error;

    fn try_from(model: users::Model) -> Result<Self> {
        let roles: Vec<String> = serde_json::from_str(&model.roles)
            .with_context(|| format!("Invalid roles stored for user {}", model.id))?;

        Ok(Self::new(
            model.id,
            model.email,
            roles,
            model.password_hash,
            model.api_token,
            model.created_at,
            model.updated_at,
        ))
    }
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>> {
        let user = users::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        user.map(User::try_from).transpose()
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("Failed to query user by email")?;

        user.map(User::try_from).transpose()
    }

    /// Exact match on the unique `api_token` column.
    pub async fn get_by_api_token(&self, token: &str) -> Result<Option<User>> {
        let user = users::Entity::find()
            .filter(users::Column::ApiToken.eq(token))
            .one(&self.conn)
            .await
            .context("Failed to query user by API token")?;

        user.map(User::try_from).transpose()
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let rows = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list users")?;

        rows.into_iter().map(User::try_from).collect()
    }

    /// Creates a user with a freshly generated API token.
    pub async fn create(
        &self,
        email: &str,
        password: &str,
        roles: &[String],
        config: &SecurityConfig,
    ) -> Result<User> {
        let password_hash = hash_in_background(password, config).await?;
        let now = chrono::Utc::now().to_rfc3339();

        let model = users::ActiveModel {
            email: Set(email.to_string()),
            roles: Set(serde_json::to_string(roles)?),
            password_hash: Set(password_hash),
            api_token: Set(generate_api_key()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
        .with_context(|| format!("Failed to create user {email}"))?;

        User::try_from(model)
    }

    /// Replaces whichever of roles and password are given.
    pub async fn update_account(
        &self,
        id: i32,
        roles: Option<&[String]>,
        password: Option<&str>,
        config: &SecurityConfig,
    ) -> Result<Option<User>> {
        let password_hash = match password {
            Some(password) => Some(hash_in_background(password, config).await?),
            None => None,
        };

        let txn = self.conn.begin().await?;

        let Some(user) = users::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: users::ActiveModel = user.into();
        if let Some(roles) = roles {
            active.roles = Set(serde_json::to_string(roles)?);
        }
        if let Some(hash) = password_hash {
            active.password_hash = Set(hash);
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        User::try_from(updated).map(Some)
    }

    /// Regenerate API token for a user
    pub async fn regenerate_api_token(&self, id: i32) -> Result<Option<User>> {
        let Some(user) = users::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user for token regeneration")?
        else {
            return Ok(None);
        };

        let mut active: users::ActiveModel = user.into();
        active.api_token = Set(generate_api_key());
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        let updated = active.update(&self.conn).await?;

        User::try_from(updated).map(Some)
    }
}

/// Argon2 is CPU-bound; keep it off the async workers.
async fn hash_in_background(password: &str, config: &SecurityConfig) -> Result<String> {
    let password = password.to_string();
    let config = config.clone();

    task::spawn_blocking(move || hash_password(&password, Some(&config)))
        .await
        .context("Password hashing task panicked")?
}

/// Hash a password using Argon2id with optional custom params.
/// If config is None, uses the argon2 crate defaults.
pub fn hash_password(password: &str, config: Option<&SecurityConfig>) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = if let Some(cfg) = config {
        let params = Params::new(
            cfg.argon2_memory_cost_kib,
            cfg.argon2_time_cost,
            cfg.argon2_parallelism,
            None,
        )
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))?;
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    } else {
        Argon2::default()
    };

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}

/// Generate a random API token (64 character hex string)
#[must_use]
pub fn generate_api_key() -> String {
    use rand::Rng;

    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();

    bytes.iter().fold(String::with_capacity(64), |mut acc, b| {
        use std::fmt::Write;
        let _ = write!(acc, "{b:02x}");
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    #[test]
    fn test_generate_api_key() {
        let key = generate_api_key();
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(key, generate_api_key());
    }

    #[test]
    fn test_hash_password_with_config() {
        let config = SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            ..SecurityConfig::default()
        };
        let hash = hash_password("correct horse", Some(&config)).unwrap();
        assert!(hash.starts_with("$argon2id$"));

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"correct horse", &parsed)
                .is_ok()
        );
    }

    #[test]
    fn test_invalid_argon2_params_are_rejected() {
        let config = SecurityConfig {
            argon2_memory_cost_kib: 1,
            ..SecurityConfig::default()
        };
        assert!(hash_password("password", Some(&config)).is_err());
    }
}
