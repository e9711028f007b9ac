//! Typed path parameter helpers.

use dragonball_core::error::AppError;

/// Parses a numeric id from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid id: {s}")))
}
