//! Credential verification for the login flow.

use std::sync::Arc;

use tracing::{debug, warn};

use dragonball_core::error::AppError;
use dragonball_core::result::AppResult;
use dragonball_database::store::UserStore;
use dragonball_entity::user::User;

use crate::password::PasswordHasher;

/// The single message for every login failure.
pub const BAD_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Looks up an identity and checks its password.
#[derive(Clone)]
pub struct Authenticator {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Returns the identity when `password` matches, otherwise `BadCredentials`.
    ///
    /// An unknown username and a wrong password fail identically. Store
    /// failures propagate as they are.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let Some(user) = self.users.find_by_username(username).await? else {
            debug!("Login rejected: unknown username");
            return Err(AppError::bad_credentials(BAD_CREDENTIALS_MESSAGE));
        };

        let matches = match self.hasher.verify_async(password, &user.password_hash).await {
            Ok(matches) => matches,
            Err(e) => {
                // Unreadable hashes count as a mismatch.
                warn!(user_id = user.id, error = %e, "Stored password hash is unreadable");
                false
            }
        };

        if !matches {
            debug!(user_id = user.id, "Login rejected: password mismatch");
            return Err(AppError::bad_credentials(BAD_CREDENTIALS_MESSAGE));
        }

        Ok(user)
    }
}
