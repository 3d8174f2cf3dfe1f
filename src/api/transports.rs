//! `/api/transports` endpoints. Open to anonymous callers.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::Method,
};
use std::sync::Arc;

use super::projection::{self, MessageResponse, TransportDto};
use super::validation::parse_id;
use super::{ApiError, AppState};
use crate::forms::{self, BindMode};
use crate::services::TransportError;

pub(super) const NOT_FOUND: &str = "The transport does not exist";

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NotFound(_) => Self::not_found(NOT_FOUND),
            TransportError::Validation(errors) => Self::InvalidFields(errors),
            TransportError::Database(msg) => Self::DatabaseError(msg),
            TransportError::Internal(msg) => Self::internal(msg),
        }
    }
}

pub async fn list_transports(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TransportDto>>, ApiError> {
    let transports = state.transport_service().list().await?;
    Ok(Json(projection::transports(&transports)))
}

pub async fn get_transport(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TransportDto>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let transport = state.transport_service().get(id).await?;
    Ok(Json((&transport).into()))
}

/// Both `number` and `type` are required.
pub async fn create_transport(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<TransportDto>, ApiError> {
    let submission = forms::decode(&body)?;
    let created = state
        .transport_service()
        .create(submission)
        .await
        .map_err(|e| ApiError::from(e).without_field_details())?;

    Ok(Json((&created).into()))
}

/// PUT replaces every field; PATCH only the submitted ones.
pub async fn update_transport(
    State(state): State<Arc<AppState>>,
    method: Method,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TransportDto>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let service = state.transport_service();
    let current = service.get(id).await?;

    let submission = forms::decode(&body)?;
    let updated = service
        .update(&current, submission, BindMode::for_method(&method))
        .await?;

    Ok(Json((&updated).into()))
}

pub async fn delete_transport(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    state.transport_service().delete(id).await?;

    Ok(Json(MessageResponse::new("The transport is deleted")))
}
