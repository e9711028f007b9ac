//! Route definitions for the HTTP API.
//!
//! All routes are mounted under `/api`. The request authentication
//! middleware wraps every route; per-route access rules live in the
//! handlers.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the auth/logging middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(character_routes())
        .merge(user_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::authenticate_request,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Public auth endpoints plus `me`
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/me", get(handlers::auth::me))
}

/// Character catalog; mutations are admin-only
fn character_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/characters",
            get(handlers::character::list_characters).post(handlers::character::create_character),
        )
        .route(
            "/characters/{id}",
            get(handlers::character::get_character)
                .put(handlers::character::update_character)
                .delete(handlers::character::delete_character),
        )
}

/// User listing (admin) and the caller's favourites
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users/favourites", get(handlers::user::list_favourites))
        .route(
            "/users/favourites/{character_id}",
            post(handlers::user::add_favourite).delete(handlers::user::remove_favourite),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
