//! Shared harness: a router over a fresh temporary SQLite database.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use depot::api::AppState;
use depot::config::Config;
use depot::db::migrator::DEFAULT_API_TOKEN;
use depot::models::transport::{Transport, TransportType};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub admin_token: String,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub text: String,
}

pub async fn spawn_app() -> TestApp {
    let db_path =
        std::env::temp_dir().join(format!("depot-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;

    let state = depot::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");

    TestApp {
        router: depot::api::router(state.clone()),
        state,
        admin_token: DEFAULT_API_TOKEN.to_string(),
    }
}

impl TestApp {
    /// Sends a request the way a plain HTTP client would: raw body, no
    /// content type.
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("x-api-token", token);
        }
        let request = builder
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&bytes).to_string();

        TestResponse {
            status,
            headers,
            body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
            text,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send("GET", uri, token, None).await
    }

    /// Registers a user with no extra roles and returns its API token.
    pub async fn plain_user_token(&self, email: &str) -> String {
        self.state
            .user_service()
            .create(email, "long enough secret", vec![])
            .await
            .expect("Failed to create user")
            .api_token
    }

    pub async fn create_type(&self, name: &str) -> TransportType {
        self.state
            .store()
            .create_transport_type(name)
            .await
            .expect("Failed to create type")
    }

    pub async fn seed(&self, count: u32) -> Vec<Transport> {
        depot::cli::seed_sample_data(self.state.store(), count)
            .await
            .expect("Failed to seed")
    }
}
