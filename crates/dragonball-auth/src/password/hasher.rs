//! bcrypt password hashing and verification.

use dragonball_core::error::AppError;

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// Handles password hashing and verification using bcrypt.
///
/// Plain bcrypt calls block for the whole work factor; async callers go
/// through [`PasswordHasher::hash_async`] / [`PasswordHasher::verify_async`].
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher with the given bcrypt work factor (4..=31).
    pub fn new(cost: u32) -> Result<Self, AppError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(AppError::configuration(format!(
                "bcrypt cost must be between {MIN_COST} and {MAX_COST} (got {cost})"
            )));
        }
        Ok(Self { cost })
    }

    /// The configured work factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when the hash itself is malformed.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))
    }

    /// [`hash`](Self::hash) on the blocking thread pool.
    pub async fn hash_async(&self, password: &str) -> Result<String, AppError> {
        let hasher = *self;
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    /// [`verify`](Self::verify) on the blocking thread pool.
    pub async fn verify_async(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let hasher = *self;
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}
