//! User listing and favourites handlers.

use axum::Json;
use axum::extract::{Path, State};

use dragonball_entity::character::Character;

use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, parse_id};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/users (admin)
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    require_admin(&auth)?;
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/favourites
pub async fn list_favourites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Character>>, ApiError> {
    Ok(Json(state.favourite_service.list(&auth).await?))
}

/// POST /api/users/favourites/{character_id}
pub async fn add_favourite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(character_id): Path<String>,
) -> Result<Json<Vec<Character>>, ApiError> {
    let character_id = parse_id(&character_id)?;
    Ok(Json(state.favourite_service.add(&auth, character_id).await?))
}

/// DELETE /api/users/favourites/{character_id}
pub async fn remove_favourite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(character_id): Path<String>,
) -> Result<Json<Vec<Character>>, ApiError> {
    let character_id = parse_id(&character_id)?;
    Ok(Json(
        state.favourite_service.remove(&auth, character_id).await?,
    ))
}
