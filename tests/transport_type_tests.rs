//! Integration tests for `/api/transports/types`.

mod common;

use axum::http::StatusCode;
use common::spawn_app;
use serde_json::json;

#[tokio::test]
async fn test_listing_requires_a_caller() {
    let app = spawn_app().await;

    let response = app.get("/api/transports/types/", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .get("/api/transports/types/", Some("not-a-real-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_plain_users_can_view_but_not_modify() {
    let app = spawn_app().await;
    let bus = app.create_type("Bus").await;
    let token = app.plain_user_token("rider@example.com").await;

    let response = app.get("/api/transports/types/", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([{ "id": bus.id, "name": "Bus" }]));

    let response = app
        .send(
            "POST",
            "/api/transports/types/",
            Some(&token),
            Some(r#"{"name": "Ferry"}"#),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let uri = format!("/api/transports/types/{}", bus.id);
    let response = app.send("DELETE", &uri, Some(&token), None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_creates_and_reads_types() {
    let app = spawn_app().await;
    let token = app.admin_token.clone();

    let mut ids = Vec::new();
    for name in ["Bus", "Tram"] {
        let body = json!({ "name": name }).to_string();
        let response = app
            .send("POST", "/api/transports/types", Some(&token), Some(&body))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["name"], name);
        ids.push(response.body["id"].as_i64().unwrap());
    }

    for id in ids {
        let response = app
            .get(&format!("/api/transports/types/{id}"), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["id"], id);
    }

    let response = app.get("/api/transports/types/4242", Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "message": "The type does not exist" }));
}

#[tokio::test]
async fn test_create_type_validation() {
    let app = spawn_app().await;
    let token = app.admin_token.clone();

    let response = app
        .send(
            "POST",
            "/api/transports/types/",
            Some(&token),
            Some(r#"{"name": "  "}"#),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({ "message": "The data is incorrect" }));

    let response = app
        .send("POST", "/api/transports/types/", Some(&token), Some("{"))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "message": "The data is incorrect or is not full" })
    );
}

#[tokio::test]
async fn test_update_type() {
    let app = spawn_app().await;
    let token = app.admin_token.clone();
    let bus = app.create_type("Bus").await;
    let uri = format!("/api/transports/types/{}", bus.id);

    let response = app.send("PATCH", &uri, Some(&token), Some("{}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Bus");

    let response = app
        .send("PUT", &uri, Some(&token), Some(r#"{"name": "Coach"}"#))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "id": bus.id, "name": "Coach" }));

    let response = app.send("PUT", &uri, Some(&token), Some("{}")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "message": { "name": ["This value should not be blank."] } })
    );
}

#[tokio::test]
async fn test_delete_type() {
    let app = spawn_app().await;
    let token = app.admin_token.clone();
    let transport = app.seed(1).await.remove(0);
    let unused = app.create_type("Funicular").await;

    let used_uri = format!("/api/transports/types/{}", transport.type_id());
    let response = app.send("DELETE", &used_uri, Some(&token), None).await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let uri = format!("/api/transports/types/{}", unused.id);
    let response = app.send("DELETE", &uri, Some(&token), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "message": "The type is deleted" }));

    let response = app.send("DELETE", &uri, Some(&token), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
