//! Per-request bearer token resolution.
//!
//! ```text
//! NoToken ─────────────────────────────────────────────► Anonymous
//! TokenPresent ─► TokenDecoded ─► IdentityLoaded ─► TokenValidated ─► Authenticated
//!      │               │                │                  │
//!      └── bad prefix  └── bad token    └── unknown user   └── expired / wrong subject
//!                                 (all ─► Anonymous)
//! ```
//!
//! Rejection is never decided here: an anonymous request is turned into a
//! 401/403 only by the authorization gate of the operation it reaches.

use std::sync::Arc;

use tracing::debug;

use dragonball_core::error::ErrorKind;
use dragonball_core::result::AppResult;
use dragonball_database::store::UserStore;

use crate::context::AuthContext;
use crate::jwt::TokenCodec;

/// Scheme prefix of the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Why a request proceeds without an authenticated context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnonymousReason {
    /// No header, or not a `Bearer` header.
    NoToken,
    /// Malformed token or bad signature.
    TokenInvalid,
    /// The token's subject no longer exists.
    UnknownSubject,
    /// The token is past its expiry.
    TokenExpired,
    /// The subject does not match the loaded identity.
    TokenRejected,
}

/// Result of running the interceptor over one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Anonymous(AnonymousReason),
    Authenticated(AuthContext),
}

impl AuthOutcome {
    /// The established context, if any.
    pub fn into_context(self) -> Option<AuthContext> {
        match self {
            Self::Authenticated(ctx) => Some(ctx),
            Self::Anonymous(_) => None,
        }
    }
}

/// Resolves an `Authorization` header into an [`AuthOutcome`].
#[derive(Clone)]
pub struct RequestAuthenticator {
    codec: Arc<TokenCodec>,
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for RequestAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestAuthenticator")
            .field("codec", &self.codec)
            .finish()
    }
}

impl RequestAuthenticator {
    pub fn new(codec: Arc<TokenCodec>, users: Arc<dyn UserStore>) -> Self {
        Self { codec, users }
    }

    /// Runs the state machine for the raw `Authorization` header value.
    ///
    /// Only a failing identity lookup is an error; every token problem
    /// yields [`AuthOutcome::Anonymous`].
    pub async fn authenticate(&self, authorization: Option<&str>) -> AppResult<AuthOutcome> {
        let Some(token) = authorization.and_then(|h| h.strip_prefix(BEARER_PREFIX)) else {
            return Ok(AuthOutcome::Anonymous(AnonymousReason::NoToken));
        };

        let claims = match self.codec.decode(token.trim()) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(reason = %e.message, "Bearer token rejected");
                return Ok(AuthOutcome::Anonymous(AnonymousReason::TokenInvalid));
            }
        };

        let Some(user) = self.users.find_by_username(&claims.sub).await? else {
            debug!("Bearer token subject no longer exists");
            return Ok(AuthOutcome::Anonymous(AnonymousReason::UnknownSubject));
        };

        if let Err(e) = self.codec.verify_claims(&claims, &user.username) {
            debug!(user_id = user.id, reason = %e.message, "Bearer token rejected");
            let reason = match e.kind {
                ErrorKind::TokenExpired => AnonymousReason::TokenExpired,
                _ => AnonymousReason::TokenRejected,
            };
            return Ok(AuthOutcome::Anonymous(reason));
        }

        if !claims.role_names().contains(&user.role.as_str()) {
            debug!(user_id = user.id, "Token roles differ from stored role; using stored role");
        }

        Ok(AuthOutcome::Authenticated(AuthContext::for_user(&user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use dragonball_database::memory::MemoryUserRepository;
    use dragonball_entity::user::{CreateUser, Role};

    const SECRET: &str = "0123456789012345678901234567890a";

    struct Fixture {
        interceptor: RequestAuthenticator,
        codec: Arc<TokenCodec>,
        users: Arc<MemoryUserRepository>,
    }

    async fn fixture() -> Fixture {
        let codec = Arc::new(TokenCodec::from_secret(SECRET, 86_400_000).unwrap());
        let users = Arc::new(MemoryUserRepository::new());
        for (name, role) in [("goku", Role::Player), ("whis", Role::Admin)] {
            users
                .create(CreateUser {
                    username: name.into(),
                    password_hash: "$2b$04$unused".into(),
                    role,
                })
                .await
                .unwrap();
        }
        Fixture {
            interceptor: RequestAuthenticator::new(codec.clone(), users.clone()),
            codec,
            users,
        }
    }

    fn bearer(token: &str) -> String {
        format!("{BEARER_PREFIX}{token}")
    }

    #[tokio::test]
    async fn test_missing_header_is_anonymous() {
        let f = fixture().await;
        let outcome = f.interceptor.authenticate(None).await.unwrap();
        assert_eq!(outcome, AuthOutcome::Anonymous(AnonymousReason::NoToken));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_anonymous() {
        let f = fixture().await;
        let token = f.codec.issue("goku", &[Role::Player]).unwrap();
        for header in [format!("Basic {token}"), format!("bearer {token}"), token] {
            let outcome = f.interceptor.authenticate(Some(&header)).await.unwrap();
            assert_eq!(outcome, AuthOutcome::Anonymous(AnonymousReason::NoToken));
        }
    }

    #[tokio::test]
    async fn test_garbage_token_is_anonymous() {
        let f = fixture().await;
        let outcome = f
            .interceptor
            .authenticate(Some(&bearer("garbage")))
            .await
            .unwrap();
        assert_eq!(outcome, AuthOutcome::Anonymous(AnonymousReason::TokenInvalid));
    }

    #[tokio::test]
    async fn test_valid_token_establishes_context_from_stored_role() {
        let f = fixture().await;
        // Roles in the token are informational; the stored role wins.
        let token = f.codec.issue("whis", &[Role::Player]).unwrap();
        let ctx = f
            .interceptor
            .authenticate(Some(&bearer(&token)))
            .await
            .unwrap()
            .into_context()
            .unwrap();
        assert_eq!(ctx.username, "whis");
        assert_eq!(ctx.role, Role::Admin);
        assert_eq!(ctx.authorities, vec!["ROLE_ADMIN".to_string()]);
    }

    #[tokio::test]
    async fn test_deleted_user_loses_auth_silently() {
        let f = fixture().await;
        let token = f.codec.issue("goku", &[Role::Player]).unwrap();
        let goku = f.users.find_by_username("goku").await.unwrap().unwrap();
        f.users.delete(goku.id).await.unwrap();

        let outcome = f
            .interceptor
            .authenticate(Some(&bearer(&token)))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            AuthOutcome::Anonymous(AnonymousReason::UnknownSubject)
        );
    }

    #[tokio::test]
    async fn test_expired_token_is_anonymous() {
        let f = fixture().await;
        let issued_at = Utc::now() - Duration::days(2);
        let token = f.codec.issue_at("goku", &[Role::Player], issued_at).unwrap();
        let outcome = f
            .interceptor
            .authenticate(Some(&bearer(&token)))
            .await
            .unwrap();
        assert_eq!(outcome, AuthOutcome::Anonymous(AnonymousReason::TokenExpired));
    }
}
