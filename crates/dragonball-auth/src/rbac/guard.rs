//! Role checks evaluated before a protected operation runs.

use dragonball_core::error::AppError;
use dragonball_entity::user::Role;

use crate::context::AuthContext;

/// What an operation demands of its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Any authenticated identity.
    Authenticated,
    /// An authenticated identity holding this role.
    Role(Role),
}

impl Requirement {
    /// Shorthand for `Requirement::Role(Role::Admin)`.
    pub const ADMIN: Self = Self::Role(Role::Admin);
}

/// Checks `ctx` against `requirement`.
///
/// `Unauthenticated` when there is no context at all, `Forbidden` when the
/// context lacks the role.
pub fn authorize<'a>(
    ctx: Option<&'a AuthContext>,
    requirement: Requirement,
) -> Result<&'a AuthContext, AppError> {
    let ctx = ctx.ok_or_else(|| AppError::unauthenticated("Authentication required"))?;
    match requirement {
        Requirement::Authenticated => Ok(ctx),
        Requirement::Role(role) if ctx.has_role(role) => Ok(ctx),
        Requirement::Role(role) => Err(AppError::forbidden(format!(
            "Role '{role}' required for this operation"
        ))),
    }
}
