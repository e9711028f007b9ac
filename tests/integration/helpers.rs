//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use dragonball_api::{AppState, build_app};
use dragonball_core::config::AppConfig;
use dragonball_database::memory::{MemoryCharacterRepository, MemoryUserRepository};
use dragonball_database::UserStore;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for reaching the codec directly
    pub state: AppState,
    /// Credential store behind the router
    pub users: Arc<MemoryUserRepository>,
}

impl TestApp {
    /// Create a new seeded test application over in-memory stores
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = TEST_SECRET.to_string();
        config.auth.bcrypt_cost = 4;

        let users = Arc::new(MemoryUserRepository::new());
        let characters = Arc::new(MemoryCharacterRepository::new());

        let state = AppState::new(config, users.clone(), characters)
            .expect("Failed to build app state");
        state.seeder().run().await.expect("Failed to seed");

        let router = build_app(state.clone());

        Self {
            router,
            state,
            users,
        }
    }

    /// Removes an identity directly from the store
    pub async fn delete_user(&self, username: &str) {
        let user = self
            .users
            .find_by_username(username)
            .await
            .expect("lookup failed")
            .expect("user missing");
        assert!(self.users.delete(user.id).await.expect("delete failed"));
    }

    /// Login and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login("admin", "admin123").await
    }

    pub async fn player_token(&self) -> String {
        self.login("player", "player123").await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let header = token.map(|t| format!("Bearer {t}"));
        self.request_with_header(method, path, body, header.as_deref())
            .await
    }

    /// Make an HTTP request with a raw `Authorization` header value
    pub async fn request_with_header(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when empty
    pub body: Value,
}

pub fn sample_character(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "race": "Namekian",
        "ki": "3,000",
        "maxKi": "1.2 Billion",
        "powerLevel": 1200,
        "universe": 7,
        "villain": false,
        "gender": "Male",
        "description": "Demon King's reincarnation",
        "affiliation": "Z Fighter",
        "transformations": ["Orange Piccolo"]
    })
}
