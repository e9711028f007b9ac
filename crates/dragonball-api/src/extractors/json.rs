//! JSON body handling with `validator` checks.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use validator::Validate;

use crate::error::ApiError;

/// Unwraps a JSON body extracted as `Result<Json<T>, JsonRejection>` and
/// validates it.
///
/// Handlers take the body as a `Result` so role guards run before any
/// body problem is reported.
pub fn validated<T: Validate>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    let Json(value) = body?;
    value.validate()?;
    Ok(value)
}
