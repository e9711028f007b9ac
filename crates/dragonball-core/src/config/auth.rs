//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Minimum length of the HMAC signing secret, in bytes.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// Token signing and password hashing configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Must be at least 32 bytes.
    #[serde(default)]
    pub jwt_secret: String,
    /// Token lifetime in milliseconds.
    #[serde(default = "default_expiration_ms")]
    pub jwt_expiration_ms: i64,
    /// bcrypt work factor.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Checks the signing secret and token lifetime.
    ///
    /// Shared by [`AuthConfig::validate`] and the token codec constructor.
    pub fn check_token_settings(secret: &str, lifetime_ms: i64) -> Result<(), AppError> {
        if secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(AppError::configuration(format!(
                "JWT secret must be at least {MIN_JWT_SECRET_BYTES} bytes long (got {})",
                secret.len()
            )));
        }
        if lifetime_ms <= 0 {
            return Err(AppError::configuration(
                "JWT expiration must be a positive number of milliseconds",
            ));
        }
        Ok(())
    }

    /// Checks the invariants the token codec and password hasher rely on.
    pub fn validate(&self) -> Result<(), AppError> {
        Self::check_token_settings(&self.jwt_secret, self.jwt_expiration_ms)?;
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(AppError::configuration(format!(
                "bcrypt cost must be between 4 and 31 (got {})",
                self.bcrypt_cost
            )));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            jwt_expiration_ms: default_expiration_ms(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiration_ms", &self.jwt_expiration_ms)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

fn default_expiration_ms() -> i64 {
    86_400_000
}

fn default_bcrypt_cost() -> u32 {
    12
}
