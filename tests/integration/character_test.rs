//! Integration tests for the character catalog.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_list_requires_authentication() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/characters", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_seeded_catalog_is_visible_to_players() {
    let app = helpers::TestApp::new().await;
    let token = app.player_token().await;

    let response = app
        .request("GET", "/api/characters", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let list = response.body.as_array().expect("array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Goku");
    assert_eq!(list[0]["powerLevel"], 900_000_000_000_i64);
}

#[tokio::test]
async fn test_admin_create_get_update_delete() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let created = app
        .request(
            "POST",
            "/api/characters",
            Some(helpers::sample_character("Piccolo")),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_i64().expect("id");
    assert!(
        created.body["imageUrl"]
            .as_str()
            .is_some_and(|u| !u.is_empty())
    );

    let fetched = app
        .request("GET", &format!("/api/characters/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["race"], "Namekian");

    let mut update = helpers::sample_character("Piccolo");
    update["powerLevel"] = serde_json::json!(5000);
    update["universe"] = serde_json::json!(11);
    update["transformations"] = serde_json::json!([]);
    let updated = app
        .request(
            "PUT",
            &format!("/api/characters/{id}"),
            Some(update),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["powerLevel"], 5000);
    assert_eq!(updated.body["universe"], 7);
    assert_eq!(
        updated.body["transformations"],
        serde_json::json!(["Orange Piccolo"])
    );

    let deleted = app
        .request("DELETE", &format!("/api/characters/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/characters/{id}"), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rejects_invalid_body() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let mut body = helpers::sample_character("Cell");
    body["powerLevel"] = serde_json::json!(-1);
    let negative = app
        .request("POST", "/api/characters", Some(body), Some(&token))
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);

    let nameless = app
        .request(
            "POST",
            "/api/characters",
            Some(serde_json::json!({"name": "", "race": "Android"})),
            Some(&token),
        )
        .await;
    assert_eq!(nameless.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_and_malformed_ids() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let unknown = app
        .request("GET", "/api/characters/999", None, Some(&token))
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request("GET", "/api/characters/kakarot", None, Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);

    let delete_unknown = app
        .request("DELETE", "/api/characters/999", None, Some(&token))
        .await;
    assert_eq!(delete_unknown.status, StatusCode::NOT_FOUND);
}
