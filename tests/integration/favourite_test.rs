//! Integration tests for per-user favourites.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_add_list_remove_favourite() {
    let app = helpers::TestApp::new().await;
    let token = app.player_token().await;

    let empty = app
        .request("GET", "/api/users/favourites", None, Some(&token))
        .await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body, serde_json::json!([]));

    let added = app
        .request("POST", "/api/users/favourites/1", None, Some(&token))
        .await;
    assert_eq!(added.status, StatusCode::OK);
    assert_eq!(added.body.as_array().map(Vec::len), Some(1));
    assert_eq!(added.body[0]["name"], "Goku");

    let again = app
        .request("POST", "/api/users/favourites/1", None, Some(&token))
        .await;
    assert_eq!(again.body.as_array().map(Vec::len), Some(1));

    let removed = app
        .request("DELETE", "/api/users/favourites/1", None, Some(&token))
        .await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.body, serde_json::json!([]));
}

#[tokio::test]
async fn test_favourites_are_per_user() {
    let app = helpers::TestApp::new().await;
    let player = app.player_token().await;
    let player2 = app.login("player2", "player222").await;

    app.request("POST", "/api/users/favourites/1", None, Some(&player))
        .await;

    let other = app
        .request("GET", "/api/users/favourites", None, Some(&player2))
        .await;
    assert_eq!(other.body, serde_json::json!([]));
}

#[tokio::test]
async fn test_favourite_unknown_character_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.player_token().await;

    let response = app
        .request("POST", "/api/users/favourites/404", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Character with ID: 404 not found");
}

#[tokio::test]
async fn test_favourites_require_authentication() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/api/users/favourites/1", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleting_character_clears_favourites() {
    let app = helpers::TestApp::new().await;
    let player = app.player_token().await;
    let admin = app.admin_token().await;

    app.request("POST", "/api/users/favourites/1", None, Some(&player))
        .await;
    let deleted = app
        .request("DELETE", "/api/characters/1", None, Some(&admin))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let favourites = app
        .request("GET", "/api/users/favourites", None, Some(&player))
        .await;
    assert_eq!(favourites.body, serde_json::json!([]));
}
