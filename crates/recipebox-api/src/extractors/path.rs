//! Typed path parameter helpers.

use uuid::Uuid;

use recipebox_core::error::AppError;

/// Parses a recipe id from a path segment.
///
/// A malformed id cannot name an existing recipe, so it is reported as
/// `NotFound` rather than a validation failure.
pub fn parse_recipe_id(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::not_found("Recipe not found"))
}
