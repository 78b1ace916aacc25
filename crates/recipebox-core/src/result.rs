//! Convenience result type alias for RecipeBox.

use crate::error::AppError;

/// A specialized `Result` type for RecipeBox operations.
pub type AppResult<T> = Result<T, AppError>;
