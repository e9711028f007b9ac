//! Registration and identity administration.

use std::sync::Arc;

use tracing::info;

use dragonball_auth::PasswordHasher;
use dragonball_core::error::{AppError, ErrorKind};
use dragonball_core::result::AppResult;
use dragonball_database::store::UserStore;
use dragonball_entity::user::{CreateUser, Role, User};

/// Handles registration and identity listing.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Registers a new identity.
    ///
    /// The new identity is always a [`Role::Player`]; `requested_role` is
    /// accepted only so callers can pass the raw request through, and is
    /// ignored.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        requested_role: Option<&str>,
    ) -> AppResult<User> {
        if username.trim().is_empty() {
            return Err(AppError::validation("Username must not be empty"));
        }
        if password.is_empty() {
            return Err(AppError::validation("Password must not be empty"));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict("username already exists"));
        }

        let password_hash = self.hasher.hash_async(password).await?;
        let user = self
            .users
            .create(CreateUser {
                username: username.to_string(),
                password_hash,
                role: Role::Player,
            })
            .await?;

        let escalation = requested_role
            .and_then(|r| r.parse::<Role>().ok())
            .is_some_and(|r| r != Role::Player);
        if escalation {
            info!(user_id = user.id, "Ignored requested role on registration");
        }
        info!(user_id = user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// All identities, ordered by id.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Creates the identity, or resets its password and role if it exists.
    pub async fn create_or_update(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> AppResult<User> {
        let password_hash = self.hasher.hash_async(password).await?;

        if let Some(existing) = self.users.find_by_username(username).await? {
            return self
                .users
                .update_credentials(existing.id, &password_hash, role)
                .await;
        }

        match self
            .users
            .create(CreateUser {
                username: username.to_string(),
                password_hash: password_hash.clone(),
                role,
            })
            .await
        {
            // Lost a race with a concurrent insert of the same name.
            Err(e) if e.kind == ErrorKind::Conflict => {
                let existing = self
                    .users
                    .find_by_username(username)
                    .await?
                    .ok_or(e)?;
                self.users
                    .update_credentials(existing.id, &password_hash, role)
                    .await
            }
            other => other,
        }
    }
}
