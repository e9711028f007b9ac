//! Auth handlers: login, register, me.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, MeResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, validated};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = body?;
    let result = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        token: result.token,
        username: result.user.username,
        role: result.user.role.to_string(),
        user_id: result.user.id,
    }))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let req = validated(body)?;
    let user = state
        .user_service
        .register(&req.username, &req.password, req.role.as_deref())
        .await?;

    Ok(Json(MessageResponse {
        message: format!("registered {}", user.username),
    }))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse::from(auth.context()))
}
