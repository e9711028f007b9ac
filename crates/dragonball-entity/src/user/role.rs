//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available to an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular player; may browse the catalog and manage their favourites.
    #[default]
    Player,
    /// Administrator; may mutate the catalog and list identities.
    Admin,
}

impl Role {
    /// Return the role name as carried in tokens and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "PLAYER",
            Self::Admin => "ADMIN",
        }
    }

    /// The granted authority derived from this role (`ROLE_ADMIN`, ...).
    pub fn authority(&self) -> String {
        format!("ROLE_{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = dragonball_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PLAYER" => Ok(Self::Player),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(dragonball_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: PLAYER, ADMIN"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("PLAYER".parse::<Role>().unwrap(), Role::Player);
        assert!("wizard".parse::<Role>().is_err());
    }

    #[test]
    fn test_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(Role::Player.authority(), "ROLE_PLAYER");
    }
}
