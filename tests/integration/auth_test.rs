//! Integration tests for login, registration and the interceptor.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use dragonball_entity::user::Role;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "admin", "password": "admin123"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["username"], "admin");
    assert_eq!(response.body["role"], "ADMIN");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new().await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "player", "password": "nope"})),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "vegeta", "password": "nope"})),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["error"], unknown_user.body["error"]);
    assert_eq!(wrong_password.body["message"], unknown_user.body["message"]);
}

#[tokio::test]
async fn test_blank_or_missing_credentials_fail_like_wrong_password() {
    let app = helpers::TestApp::new().await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "player", "password": "nope"})),
            None,
        )
        .await;

    for body in [
        serde_json::json!({"username": "", "password": "x"}),
        serde_json::json!({"username": "player", "password": ""}),
        serde_json::json!({"username": "player"}),
    ] {
        let response = app
            .request("POST", "/api/auth/login", Some(body.clone()), None)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{body}");
        assert_eq!(response.body["error"], wrong_password.body["error"]);
        assert_eq!(response.body["message"], wrong_password.body["message"]);
    }
}

#[tokio::test]
async fn test_register_then_login() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({"username": "krillin", "password": "destructo"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "registered krillin");

    let token = app.login("krillin", "destructo").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["username"], "krillin");
    assert_eq!(me.body["role"], "PLAYER");
}

#[tokio::test]
async fn test_register_ignores_requested_admin_role() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "frieza",
                "password": "goldenform",
                "role": "ADMIN"
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let token = app.login("frieza", "goldenform").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.body["role"], "PLAYER");
    assert_eq!(me.body["authorities"], serde_json::json!(["ROLE_PLAYER"]));

    let users = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(users.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_register_existing_username_conflicts() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({"username": "player", "password": "whatever"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "username already exists");
}

#[tokio::test]
async fn test_me_without_token_is_unauthorized() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_header_is_anonymous() {
    let app = helpers::TestApp::new().await;
    let token = app.player_token().await;

    let response = app
        .request_with_header("GET", "/api/auth/me", None, Some(&format!("Token {token}")))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_anonymous() {
    let app = helpers::TestApp::new().await;

    let issued = Utc::now() - Duration::days(2);
    let token = app
        .state
        .codec
        .issue_at("player", &[Role::Player], issued)
        .expect("issue");

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_of_deleted_user_is_anonymous() {
    let app = helpers::TestApp::new().await;
    let token = app.login("player3", "player333").await;

    app.delete_user("player3").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "memory");
}
