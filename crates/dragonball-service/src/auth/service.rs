//! Login: credential check followed by token issuance.

use std::sync::Arc;

use tracing::info;

use dragonball_auth::{Authenticator, TokenCodec};
use dragonball_core::result::AppResult;
use dragonball_entity::user::User;

/// A successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Signed bearer token.
    pub token: String,
    /// The authenticated identity.
    pub user: User,
}

/// Handles the login flow.
#[derive(Debug, Clone)]
pub struct AuthService {
    authenticator: Arc<Authenticator>,
    codec: Arc<TokenCodec>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(authenticator: Arc<Authenticator>, codec: Arc<TokenCodec>) -> Self {
        Self {
            authenticator,
            codec,
        }
    }

    /// Verifies the credentials and issues a token carrying the user's role.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResult> {
        let user = self.authenticator.authenticate(username, password).await?;
        let token = self.codec.issue(&user.username, &[user.role])?;

        info!(user_id = user.id, role = %user.role, "User logged in");

        Ok(LoginResult { token, user })
    }
}
