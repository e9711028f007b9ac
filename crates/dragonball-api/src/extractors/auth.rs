//! `AuthUser` extractor: the context established by the auth middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use dragonball_auth::{AuthContext, Requirement, authorize};

use crate::error::ApiError;

/// Authenticated caller available in handlers.
///
/// Rejects with 401 when the middleware established no context.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthContext);

impl AuthUser {
    /// Returns the inner `AuthContext`.
    pub fn context(&self) -> &AuthContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = AuthContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = authorize(
            parts.extensions.get::<AuthContext>(),
            Requirement::Authenticated,
        )?;
        Ok(AuthUser(ctx.clone()))
    }
}
