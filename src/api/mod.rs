use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domain::{Permission, ResourceKind};
use crate::models::user::User;
use crate::services::{FavoriteService, TransportService, TransportTypeService, UserService};
use crate::state::SharedState;

pub mod auth;
mod error;
mod favorites;
mod observability;
pub mod projection;
mod system;
mod transport_types;
mod transports;
mod users;
mod validation;

pub use error::{ApiError, INCORRECT, INCORRECT_OR_INCOMPLETE};

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn transport_type_service(&self) -> &Arc<dyn TransportTypeService> {
        &self.shared.transport_type_service
    }

    #[must_use]
    pub fn transport_service(&self) -> &Arc<dyn TransportService> {
        &self.shared.transport_service
    }

    #[must_use]
    pub fn favorite_service(&self) -> &Arc<dyn FavoriteService> {
        &self.shared.favorite_service
    }

    #[must_use]
    pub fn user_service(&self) -> &Arc<dyn UserService> {
        &self.shared.user_service
    }

    /// 401 for anonymous callers, 403 when the policy denies `caller`.
    pub fn authorize(
        &self,
        caller: Option<&User>,
        permission: Permission,
        resource: ResourceKind,
    ) -> Result<(), ApiError> {
        let Some(user) = caller else {
            return Err(ApiError::Unauthorized);
        };

        if self
            .shared
            .authorizer
            .authorize(Some(user), permission, resource)
        {
            Ok(())
        } else {
            tracing::debug!(
                user_id = user.id,
                permission = %permission,
                resource = resource.as_str(),
                "Access denied"
            );
            Err(ApiError::Forbidden)
        }
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .merge(transport_routes())
        .route("/users", get(users::list_users))
        .route("/users/", get(users::list_users))
        .route("/users/me", get(users::me))
        .route(
            "/users/{id}",
            get(users::get_user).patch(users::update_user),
        )
        .route("/users/{id}/token", post(users::regenerate_token))
        .route("/system/health/live", get(system::health_live))
        .route("/system/health/ready", get(system::health_ready))
        .route("/metrics", get(observability::get_metrics))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::resolve_caller,
        ))
        .layer(middleware::from_fn(observability::logging_middleware))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(
            observability::security_headers_middleware,
        ))
}

/// Everything under `/api/transports`. Collection routes answer with and
/// without the trailing slash.
fn transport_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transports",
            get(transports::list_transports).post(transports::create_transport),
        )
        .route(
            "/transports/",
            get(transports::list_transports).post(transports::create_transport),
        )
        .route(
            "/transports/{id}",
            get(transports::get_transport)
                .put(transports::update_transport)
                .patch(transports::update_transport)
                .delete(transports::delete_transport),
        )
        .route(
            "/transports/types",
            get(transport_types::list_types).post(transport_types::create_type),
        )
        .route(
            "/transports/types/",
            get(transport_types::list_types).post(transport_types::create_type),
        )
        .route(
            "/transports/types/{id}",
            get(transport_types::get_type)
                .put(transport_types::update_type)
                .patch(transport_types::update_type)
                .delete(transport_types::delete_type),
        )
        .route(
            "/transports/favorites",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route(
            "/transports/favorites/",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route(
            "/transports/favorites/{id}",
            delete(favorites::remove_favorite),
        )
}
