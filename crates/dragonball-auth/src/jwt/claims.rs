//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username.
    pub sub: String,
    /// Comma-joined role names, e.g. `"PLAYER"`.
    pub roles: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token id; keeps tokens issued within the same second distinct.
    pub jti: Uuid,
}

impl Claims {
    /// The role names carried by the token.
    pub fn role_names(&self) -> Vec<&str> {
        self.roles
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect()
    }

    /// Whether the expiry lies strictly before `now`. No leeway.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp.saturating_mul(1000) < now.timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp: i64) -> Claims {
        Claims {
            sub: "goku".into(),
            roles: "PLAYER, ADMIN".into(),
            iat: 0,
            exp,
            jti: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_role_names_split_and_trim() {
        assert_eq!(claims(0).role_names(), vec!["PLAYER", "ADMIN"]);
    }

    #[test]
    fn test_expiry_boundary() {
        let c = claims(1_000);
        let at = |ms| DateTime::from_timestamp_millis(ms).unwrap();
        assert!(!c.is_expired_at(at(1_000_000)));
        assert!(c.is_expired_at(at(1_000_001)));
    }
}
