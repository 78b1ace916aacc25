//! JSON body helpers.

use axum::Json;
use axum::extract::rejection::JsonRejection;

use recipebox_core::error::AppError;

/// Unwraps a JSON body, reporting a malformed or incomplete body as a
/// validation failure.
///
/// Handlers extract `Result<Json<T>, JsonRejection>` and call this after
/// the caller check, so anonymous requests are rejected before the body
/// is inspected.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    }
}
