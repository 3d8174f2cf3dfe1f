use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use std::sync::Arc;

use super::auth::{Caller, require_user, user_of};
use super::projection::{self, ExposureGroup, UserDto};
use super::validation::parse_id;
use super::{ApiError, AppState};
use crate::domain::{Permission, ResourceKind};
use crate::forms;
use crate::services::UserError;

const NOT_FOUND: &str = "The user does not exist";

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => Self::not_found(NOT_FOUND),
            UserError::EmailTaken(email) => {
                Self::conflict(format!("A user with email '{email}' already exists"))
            }
            UserError::Validation(errors) => Self::InvalidFields(errors),
            UserError::Database(msg) => Self::DatabaseError(msg),
            UserError::Internal(msg) => Self::internal(msg),
        }
    }
}

/// `GET /api/users/me`
pub async fn me(caller: Caller) -> Result<Json<UserDto>, ApiError> {
    let user = require_user(&caller)?;
    Ok(Json(UserDto::project(user, ExposureGroup::UserSelf)))
}

/// `GET /api/users`
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    caller: Caller,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    state.authorize(user_of(&caller), Permission::View, ResourceKind::User)?;

    let users = state.user_service().list().await?;
    Ok(Json(projection::users(&users, ExposureGroup::RoleAdmin)))
}

/// `GET /api/users/{id}`
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    state.authorize(user_of(&caller), Permission::View, ResourceKind::User)?;

    let id = parse_id(&id, NOT_FOUND)?;
    let user = state.user_service().get(id).await?;
    Ok(Json(UserDto::project(&user, ExposureGroup::RoleAdmin)))
}

/// `PATCH /api/users/{id}` with `roles` and/or `password`.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<UserDto>, ApiError> {
    state.authorize(user_of(&caller), Permission::Update, ResourceKind::User)?;

    let id = parse_id(&id, NOT_FOUND)?;
    let service = state.user_service();
    let current = service.get(id).await?;

    let submission = forms::decode(&body)?;
    let updated = service.update_account(&current, submission).await?;

    Ok(Json(UserDto::project(&updated, ExposureGroup::RoleAdmin)))
}

/// `POST /api/users/{id}/token`
pub async fn regenerate_token(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    state.authorize(user_of(&caller), Permission::Update, ResourceKind::User)?;

    let id = parse_id(&id, NOT_FOUND)?;
    let user = state.user_service().regenerate_token(id).await?;

    Ok(Json(UserDto::project(&user, ExposureGroup::RoleAdmin)))
}
