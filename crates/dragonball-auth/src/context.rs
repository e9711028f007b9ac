//! Request-scoped authenticated context.

use dragonball_entity::user::{Role, User};

/// The identity established for one request, plus the authorities derived
/// from its role. Never shared between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
    /// Granted authorities, e.g. `ROLE_ADMIN`.
    pub authorities: Vec<String>,
}

impl AuthContext {
    /// Builds the context for a stored identity.
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
            authorities: vec![user.role.authority()],
        }
    }

    /// Whether the context carries `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.authorities.contains(&role.authority())
    }
}
