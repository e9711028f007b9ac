//! Request authentication middleware.
//!
//! Runs the interceptor once per request and stores the resulting
//! [`AuthContext`] in the request extensions. Requests without a usable
//! token pass through untouched; rejecting them is the job of the
//! [`AuthUser`](crate::extractors::AuthUser) extractor and the role guards.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::trace;

use dragonball_auth::{AuthContext, AuthOutcome};

use crate::error::ApiError;
use crate::state::AppState;

/// Resolves the bearer token, if any, into an [`AuthContext`].
pub async fn authenticate_request(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // An upstream context is never overwritten.
    if request.extensions().get::<AuthContext>().is_some() {
        return next.run(request).await;
    }

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let outcome = state.interceptor.authenticate(header.as_deref()).await;
    match outcome {
        Ok(AuthOutcome::Authenticated(ctx)) => {
            trace!(user_id = ctx.user_id, "Request authenticated");
            request.extensions_mut().insert(ctx);
        }
        Ok(AuthOutcome::Anonymous(reason)) => {
            trace!(?reason, "Request proceeds unauthenticated");
        }
        Err(e) => return ApiError::from(e).into_response(),
    }

    next.run(request).await
}
