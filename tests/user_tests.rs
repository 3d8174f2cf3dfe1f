//! Integration tests for `/api/users`.

mod common;

use axum::http::StatusCode;
use common::spawn_app;
use serde_json::json;

#[tokio::test]
async fn test_me_uses_the_user_self_projection() {
    let app = spawn_app().await;

    let response = app.get("/api/users/me", Some(&app.admin_token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "email": "admin@depot.local",
            "roles": ["ROLE_ADMIN", "ROLE_USER"],
            "api_token": app.admin_token
        })
    );

    let response = app.get("/api/users/me", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_plain_user_roles_include_role_user() {
    let app = spawn_app().await;
    let token = app.plain_user_token("rider@example.com").await;

    let response = app.get("/api/users/me", Some(&token)).await;
    assert_eq!(response.body["roles"], json!(["ROLE_USER"]));
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn test_listing_users_is_admin_only() {
    let app = spawn_app().await;
    let token = app.plain_user_token("rider@example.com").await;

    let response = app.get("/api/users", Some(&token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.get("/api/users", Some(&app.admin_token)).await;
    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user["id"].is_i64());
        assert!(user["password"].as_str().unwrap().starts_with("$argon2"));
        assert!(user["api_token"].is_string());
    }

    let response = app.get("/api/users/999", Some(&app.admin_token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "message": "The user does not exist" }));
}

#[tokio::test]
async fn test_admin_updates_roles_and_password() {
    let app = spawn_app().await;
    let token = app.plain_user_token("rider@example.com").await;
    let me = app.get("/api/users", Some(&app.admin_token)).await;
    let rider = me
        .body
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"] == "rider@example.com")
        .unwrap()
        .clone();
    let uri = format!("/api/users/{}", rider["id"]);

    let response = app
        .send(
            "PATCH",
            &uri,
            Some(&app.admin_token),
            Some(r#"{"roles": ["ROLE_ADMIN"], "password": "another long one"}"#),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["roles"], json!(["ROLE_ADMIN", "ROLE_USER"]));
    assert_ne!(response.body["password"], rider["password"]);

    // The promoted user can now reach admin endpoints
    let response = app.get("/api/users", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_account_update_validation() {
    let app = spawn_app().await;
    let users = app.get("/api/users", Some(&app.admin_token)).await;
    let uri = format!("/api/users/{}", users.body[0]["id"]);

    let response = app
        .send(
            "PATCH",
            &uri,
            Some(&app.admin_token),
            Some(r#"{"roles": ["admin"], "password": "short"}"#),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({
            "message": {
                "password": ["This value is too short. It should have 8 characters or more."],
                "roles": ["This value is not valid."]
            }
        })
    );
}

#[tokio::test]
async fn test_regenerate_token() {
    let app = spawn_app().await;
    let token = app.plain_user_token("rider@example.com").await;
    let me = app.get("/api/users", Some(&app.admin_token)).await;
    let rider_id = me
        .body
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"] == "rider@example.com")
        .unwrap()["id"]
        .clone();

    let uri = format!("/api/users/{rider_id}/token");
    let response = app.send("POST", &uri, Some(&token), None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.send("POST", &uri, Some(&app.admin_token), None).await;
    assert_eq!(response.status, StatusCode::OK);
    let new_token = response.body["api_token"].as_str().unwrap().to_string();
    assert_eq!(new_token.len(), 64);
    assert_ne!(new_token, token);

    let response = app.get("/api/users/me", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let response = app.get("/api/users/me", Some(&new_token)).await;
    assert_eq!(response.status, StatusCode::OK);
}
