//! Integration tests for the role gate on admin routes.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_admin_can_list_users() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let response = app.request("GET", "/api/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.as_array().expect("array");
    assert_eq!(users.len(), 4);
    assert!(users.iter().all(|u| u.get("passwordHash").is_none()));
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}

#[tokio::test]
async fn test_player_is_forbidden_on_admin_route() {
    let app = helpers::TestApp::new().await;
    let token = app.player_token().await;

    let response = app.request("GET", "/api/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_anonymous_is_unauthorized_on_admin_route() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/users", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_bearer_is_unauthorized_on_admin_route() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/users", None, Some("not.a.token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_admin_token_is_unauthorized() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;
    let pos = token.len() - 10;
    let original = &token[pos..pos + 1];
    let replacement = if original == "a" { "b" } else { "a" };
    let token = format!("{}{}{}", &token[..pos], replacement, &token[pos + 1..]);

    let response = app.request("GET", "/api/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_player_create_is_forbidden_even_with_bad_body() {
    let app = helpers::TestApp::new().await;
    let token = app.player_token().await;

    let response = app
        .request(
            "POST",
            "/api/characters",
            Some(serde_json::json!({"powerLevel": "lots"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_anonymous_create_is_unauthorized() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/characters",
            Some(helpers::sample_character("Piccolo")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_player_cannot_update_or_delete() {
    let app = helpers::TestApp::new().await;
    let token = app.player_token().await;

    let update = app
        .request(
            "PUT",
            "/api/characters/1",
            Some(helpers::sample_character("Goku Black")),
            Some(&token),
        )
        .await;
    let delete = app
        .request("DELETE", "/api/characters/1", None, Some(&token))
        .await;

    assert_eq!(update.status, StatusCode::FORBIDDEN);
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let still_there = app
        .request("GET", "/api/characters/1", None, Some(&token))
        .await;
    assert_eq!(still_there.status, StatusCode::OK);
    assert_eq!(still_there.body["name"], "Goku");
}
