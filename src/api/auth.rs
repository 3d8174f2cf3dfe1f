use axum::{
    Extension,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::models::user::User;

/// The user a request's API token resolved to.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Handler argument carrying the caller, if any.
pub type Caller = Option<Extension<CurrentUser>>;

#[must_use]
pub fn user_of(caller: &Caller) -> Option<&User> {
    caller.as_ref().map(|Extension(CurrentUser(user))| user)
}

/// The caller, or 401 for anonymous requests.
pub fn require_user(caller: &Caller) -> Result<&User, ApiError> {
    user_of(caller).ok_or(ApiError::Unauthorized)
}

/// Resolves the API token header into a [`CurrentUser`] extension.
///
/// Never rejects on its own: handlers decide whether a caller is required.
pub async fn resolve_caller(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = state.config().security.api_token_header.as_str();

    let token = request
        .headers()
        .get(header)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    if let Some(token) = token {
        match state.user_service().resolve_token(&token).await? {
            Some(user) => {
                tracing::Span::current().record("user_id", user.id);
                request.extensions_mut().insert(CurrentUser(user));
            }
            None => tracing::debug!("Request carried an unknown API token"),
        }
    }

    Ok(next.run(request).await)
}
