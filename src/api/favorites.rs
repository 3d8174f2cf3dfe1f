//! The caller's favorite transports, under `/api/transports/favorites`.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::auth::{Caller, require_user};
use super::error::INCORRECT_OR_INCOMPLETE;
use super::projection::{self, MessageResponse, TransportDto};
use super::transports::NOT_FOUND;
use super::validation::parse_id;
use super::{ApiError, AppState};
use crate::forms;
use crate::services::FavoriteError;

impl From<FavoriteError> for ApiError {
    fn from(err: FavoriteError) -> Self {
        match err {
            FavoriteError::TransportNotFound => Self::not_found(NOT_FOUND),
            FavoriteError::Validation(_) => Self::BadRequest(INCORRECT_OR_INCOMPLETE.to_string()),
            FavoriteError::Database(msg) => Self::DatabaseError(msg),
            FavoriteError::Internal(msg) => Self::internal(msg),
        }
    }
}

pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
    caller: Caller,
) -> Result<Json<Vec<TransportDto>>, ApiError> {
    let user = require_user(&caller)?;

    let favorites = state.favorite_service().list(user).await?;
    Ok(Json(projection::transports(&favorites)))
}

/// Body: `{"transport": <id>}`.
pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let user = require_user(&caller)?;

    let submission = forms::decode(&body)?;
    state.favorite_service().add(user, submission).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse::new("The transport is added to favorites")),
    ))
}

pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let user = require_user(&caller)?;

    let transport_id = parse_id(&id, NOT_FOUND)?;
    state.favorite_service().remove(user, transport_id).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse::new("The transport is removed from favorites")),
    ))
}
