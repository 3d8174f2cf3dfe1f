use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::forms::{DecodeError, FieldErrors};

/// Body could not be decoded, or a required key is missing.
pub const INCORRECT_OR_INCOMPLETE: &str = "The data is incorrect or is not full";

/// Create failed validation.
pub const INCORRECT: &str = "The data is incorrect";

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    BadRequest(String),

    /// Validation failure reported field by field.
    InvalidFields(FieldErrors),

    /// No caller could be resolved from the request.
    Unauthorized,

    /// The caller is known but lacks the required role.
    Forbidden,

    Conflict(String),

    DatabaseError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            Self::InvalidFields(errors) => write!(f, "Validation error: {errors}"),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::Forbidden => write!(f, "Forbidden"),
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, json!(msg)),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!(msg)),
            Self::InvalidFields(errors) => (StatusCode::BAD_REQUEST, json!(errors)),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!("Full authentication is required to access this resource"),
            ),
            Self::Forbidden => (StatusCode::FORBIDDEN, json!("Access denied")),
            Self::Conflict(msg) => (StatusCode::CONFLICT, json!(msg)),
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!("A database error occurred"),
                )
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!("An internal error occurred"),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        tracing::debug!("Rejected request body: {err}");
        Self::BadRequest(INCORRECT_OR_INCOMPLETE.to_string())
    }
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    /// Create endpoints answer validation failures with a single message
    /// instead of the per-field breakdown.
    #[must_use]
    pub fn without_field_details(self) -> Self {
        match self {
            Self::InvalidFields(_) => Self::BadRequest(INCORRECT.to_string()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_field_errors_are_nested_under_message() {
        let mut errors = FieldErrors::new();
        errors.add("number", crate::forms::NOT_BLANK);

        let (status, body) = body_of(ApiError::InvalidFields(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "message": { "number": ["This value should not be blank."] } })
        );
    }

    #[tokio::test]
    async fn test_internal_details_are_not_leaked() {
        let (status, body) = body_of(ApiError::DatabaseError("disk I/O error".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "A database error occurred" }));
    }

    #[tokio::test]
    async fn test_create_hides_field_details() {
        let err = ApiError::InvalidFields(FieldErrors::new()).without_field_details();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": INCORRECT }));
    }
}
