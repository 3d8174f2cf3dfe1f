//! `SeaORM` implementation of the `UserService` trait.

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::forms::Submission;
use crate::forms::user::{AccountDraft, PASSWORD, ROLES};
use crate::models::user::User;
use crate::services::user_service::{UserError, UserService};
use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, info};

pub const EMAIL: &str = "email";

pub struct SeaOrmUserService {
    store: Store,
    security: SecurityConfig,
}

impl SeaOrmUserService {
    #[must_use]
    pub const fn new(store: Store, security: SecurityConfig) -> Self {
        Self { store, security }
    }
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn resolve_token(&self, token: &str) -> Result<Option<User>, UserError> {
        if token.is_empty() {
            return Ok(None);
        }
        Ok(self.store.get_user_by_api_token(token).await?)
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        Ok(self.store.list_users().await?)
    }

    async fn get(&self, id: i32) -> Result<User, UserError> {
        self.store.get_user(id).await?.ok_or_else(|| {
            debug!(id, "User not found");
            UserError::NotFound
        })
    }

    async fn get_by_email(&self, email: &str) -> Result<User, UserError> {
        self.store
            .get_user_by_email(email)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn create(
        &self,
        email: &str,
        password: &str,
        roles: Vec<String>,
    ) -> Result<User, UserError> {
        let mut fields = Map::new();
        fields.insert(ROLES.to_string(), Value::from(roles));
        fields.insert(PASSWORD.to_string(), Value::from(password));

        let changes = AccountDraft::bind(Submission::from(fields)).validate();
        let email = email.trim();
        let (roles, password) = match changes {
            Ok(changes) if !email.is_empty() => (
                changes.roles.unwrap_or_default(),
                changes.password.unwrap_or_default(),
            ),
            Ok(_) => {
                let mut errors = crate::forms::FieldErrors::new();
                errors.add(EMAIL, crate::forms::NOT_BLANK);
                return Err(UserError::Validation(errors));
            }
            Err(mut errors) => {
                if email.is_empty() {
                    errors.add(EMAIL, crate::forms::NOT_BLANK);
                }
                return Err(UserError::Validation(errors));
            }
        };

        if self.store.get_user_by_email(email).await?.is_some() {
            return Err(UserError::EmailTaken(email.to_string()));
        }

        let user = self
            .store
            .create_user(email, &password, &roles, &self.security)
            .await?;
        info!(id = user.id, email = %user.email, "User created");

        Ok(user)
    }

    async fn update_account(
        &self,
        current: &User,
        submission: Submission,
    ) -> Result<User, UserError> {
        let changes = AccountDraft::bind(submission)
            .validate()
            .map_err(UserError::Validation)?;

        let updated = self
            .store
            .update_user_account(
                current.id,
                changes.roles.as_deref(),
                changes.password.as_deref(),
                &self.security,
            )
            .await?
            .ok_or(UserError::NotFound)?;
        info!(
            id = updated.id,
            roles_changed = changes.roles.is_some(),
            password_changed = changes.password.is_some(),
            "User account updated"
        );

        Ok(updated)
    }

    async fn regenerate_token(&self, id: i32) -> Result<User, UserError> {
        let user = self
            .store
            .regenerate_user_token(id)
            .await?
            .ok_or(UserError::NotFound)?;
        info!(id = user.id, "API token regenerated");

        Ok(user)
    }
}
