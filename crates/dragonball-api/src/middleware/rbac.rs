//! RBAC helpers for role-based handler guarding.

use dragonball_auth::{Requirement, authorize};
use dragonball_core::error::AppError;

use crate::extractors::AuthUser;

/// Checks that the authenticated user has the Admin role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    authorize(Some(auth.context()), Requirement::ADMIN).map(|_| ())
}
