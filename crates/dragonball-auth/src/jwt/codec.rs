//! Token issuance and verification with a process-wide HMAC key.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use dragonball_core::config::AuthConfig;
use dragonball_core::error::AppError;
use dragonball_core::result::AppResult;
use dragonball_entity::user::Role;

use super::claims::Claims;

/// Issues and verifies signed, time-bounded bearer tokens.
///
/// The key is fixed at construction and only read afterwards, so one
/// instance is shared across all request tasks.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("lifetime_ms", &self.lifetime.num_milliseconds())
            .finish()
    }
}

impl TokenCodec {
    /// Creates a codec from auth configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        Self::from_secret(&config.jwt_secret, config.jwt_expiration_ms)
    }

    /// Creates a codec from a raw secret and a lifetime in milliseconds.
    ///
    /// Fails with a configuration error when the secret is shorter than
    /// 32 bytes or the lifetime is not positive.
    pub fn from_secret(secret: &str, lifetime_ms: i64) -> AppResult<Self> {
        AuthConfig::check_token_settings(secret, lifetime_ms)?;

        // Signature only; expiry is checked separately by `is_expired`/`validate`.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "iat", "exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime: Duration::milliseconds(lifetime_ms),
        })
    }

    /// Issues a token for `subject` carrying `roles`, valid from now.
    pub fn issue(&self, subject: &str, roles: &[Role]) -> AppResult<String> {
        self.issue_at(subject, roles, Utc::now())
    }

    /// Issues a token as if it had been issued at `issued_at`.
    pub fn issue_at(
        &self,
        subject: &str,
        roles: &[Role],
        issued_at: DateTime<Utc>,
    ) -> AppResult<String> {
        let expires_at = issued_at + self.lifetime;
        let claims = Claims {
            sub: subject.to_string(),
            roles: roles
                .iter()
                .map(Role::as_str)
                .collect::<Vec<_>>()
                .join(","),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Verifies the signature and structure of `token` and returns its claims.
    ///
    /// Does not look at expiry.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::token_invalid("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::token_invalid("Invalid token format")
                }
                _ => AppError::token_invalid(format!("Token rejected: {e}")),
            })
    }

    /// Returns the subject (username) of a correctly signed token.
    pub fn decode_subject(&self, token: &str) -> AppResult<String> {
        self.decode(token).map(|claims| claims.sub)
    }

    /// Whether a correctly signed token is past its expiry.
    pub fn is_expired(&self, token: &str) -> AppResult<bool> {
        self.decode(token)
            .map(|claims| claims.is_expired_at(Utc::now()))
    }

    /// `true` iff the token decodes, its subject is `expected_username` and it
    /// has not expired.
    pub fn validate(&self, token: &str, expected_username: &str) -> bool {
        self.decode(token)
            .map(|claims| self.claims_valid_for(&claims, expected_username))
            .unwrap_or(false)
    }

    /// Subject and expiry check on already-decoded claims.
    ///
    /// `TokenInvalid` when the subject differs, `TokenExpired` when the
    /// expiry has passed.
    pub fn verify_claims(&self, claims: &Claims, expected_username: &str) -> AppResult<()> {
        if claims.sub != expected_username {
            return Err(AppError::token_invalid("Token subject does not match"));
        }
        if claims.is_expired_at(Utc::now()) {
            return Err(AppError::token_expired("Token has expired"));
        }
        Ok(())
    }

    /// Boolean form of [`TokenCodec::verify_claims`].
    pub fn claims_valid_for(&self, claims: &Claims, expected_username: &str) -> bool {
        self.verify_claims(claims, expected_username).is_ok()
    }
}
