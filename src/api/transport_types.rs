//! `/api/transports/types` endpoints. Every operation is role-checked.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::Method,
};
use std::sync::Arc;

use super::auth::{Caller, user_of};
use super::projection::{self, MessageResponse, TransportTypeDto};
use super::validation::parse_id;
use super::{ApiError, AppState};
use crate::domain::{Permission, ResourceKind};
use crate::forms::{self, BindMode, Submission};
use crate::services::TransportTypeError;

const NOT_FOUND: &str = "The type does not exist";

impl From<TransportTypeError> for ApiError {
    fn from(err: TransportTypeError) -> Self {
        match err {
            TransportTypeError::NotFound(_) => Self::not_found(NOT_FOUND),
            TransportTypeError::Validation(errors) => Self::InvalidFields(errors),
            TransportTypeError::InUse { .. } => {
                Self::conflict("The type is used by transports and cannot be deleted")
            }
            TransportTypeError::Database(msg) => Self::DatabaseError(msg),
            TransportTypeError::Internal(msg) => Self::internal(msg),
        }
    }
}

fn authorize(state: &AppState, caller: &Caller, permission: Permission) -> Result<(), ApiError> {
    state.authorize(user_of(caller), permission, ResourceKind::TransportType)
}

/// `GET /api/transports/types/`
pub async fn list_types(
    State(state): State<Arc<AppState>>,
    caller: Caller,
) -> Result<Json<Vec<TransportTypeDto>>, ApiError> {
    authorize(&state, &caller, Permission::View)?;

    let types = state.transport_type_service().list().await?;
    Ok(Json(projection::transport_types(&types)))
}

/// `GET /api/transports/types/{id}`
pub async fn get_type(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<TransportTypeDto>, ApiError> {
    authorize(&state, &caller, Permission::View)?;

    let id = parse_id(&id, NOT_FOUND)?;
    let kind = state.transport_type_service().get(id).await?;
    Ok(Json((&kind).into()))
}

/// `POST /api/transports/types/`
pub async fn create_type(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    body: Bytes,
) -> Result<Json<TransportTypeDto>, ApiError> {
    authorize(&state, &caller, Permission::Create)?;

    let submission: Submission = forms::decode(&body)?;
    let created = state
        .transport_type_service()
        .create(submission)
        .await
        .map_err(|e| ApiError::from(e).without_field_details())?;

    Ok(Json((&created).into()))
}

/// `PUT|PATCH /api/transports/types/{id}`
pub async fn update_type(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    method: Method,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TransportTypeDto>, ApiError> {
    authorize(&state, &caller, Permission::Update)?;

    let id = parse_id(&id, NOT_FOUND)?;
    let service = state.transport_type_service();
    let current = service.get(id).await?;

    let submission = forms::decode(&body)?;
    let updated = service
        .update(&current, submission, BindMode::for_method(&method))
        .await?;

    Ok(Json((&updated).into()))
}

/// `DELETE /api/transports/types/{id}`
pub async fn delete_type(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    authorize(&state, &caller, Permission::Delete)?;

    let id = parse_id(&id, NOT_FOUND)?;
    state.transport_type_service().delete(id).await?;

    Ok(Json(MessageResponse::new("The type is deleted")))
}
