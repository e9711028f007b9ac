//! Character catalog handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use dragonball_entity::character::Character;

use crate::dto::request::CharacterRequest;
use crate::error::ApiError;
use crate::extractors::{AuthUser, parse_id, validated};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/characters
pub async fn list_characters(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Character>>, ApiError> {
    Ok(Json(state.character_service.list().await?))
}

/// GET /api/characters/{id}
pub async fn get_character(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Character>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.character_service.get(id).await?))
}

/// POST /api/characters (admin)
pub async fn create_character(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<CharacterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    require_admin(&auth)?;
    let req = validated(body)?;
    let created = state.character_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/characters/{id} (admin)
pub async fn update_character(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    body: Result<Json<CharacterRequest>, JsonRejection>,
) -> Result<Json<Character>, ApiError> {
    require_admin(&auth)?;
    let id = parse_id(&id)?;
    let req = validated(body)?;
    Ok(Json(state.character_service.update(id, req.into()).await?))
}

/// DELETE /api/characters/{id} (admin)
pub async fn delete_character(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    require_admin(&auth)?;
    let id = parse_id(&id)?;
    state.character_service.delete(id).await?;
    Ok(StatusCode::OK)
}
