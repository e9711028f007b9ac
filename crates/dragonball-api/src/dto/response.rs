//! Response DTOs.

use serde::{Deserialize, Serialize};

use dragonball_auth::AuthContext;
use dragonball_entity::user::User;

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: String,
    pub user_id: i64,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Identity summary; never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role.to_string(),
        }
    }
}

/// The caller's own authenticated context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub authorities: Vec<String>,
}

impl From<&AuthContext> for MeResponse {
    fn from(ctx: &AuthContext) -> Self {
        Self {
            id: ctx.user_id,
            username: ctx.username.clone(),
            role: ctx.role.to_string(),
            authorities: ctx.authorities.clone(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: String,
}
