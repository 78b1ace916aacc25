//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use recipebox_core::error::AppError;
use recipebox_service::RecipeInput;

/// Create/update recipe request body.
///
/// Trimming and the category check happen in the service; this only
/// rejects bodies that cannot be valid however they are trimmed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    /// Title.
    #[validate(length(min = 1, message = "Title and content are required"))]
    pub title: String,
    /// Body.
    #[validate(length(min = 1, message = "Title and content are required"))]
    pub content: String,
    /// Selected category.
    pub category_id: Option<Uuid>,
    /// Whether the recipe is listed publicly.
    #[serde(default)]
    pub is_public: bool,
}

impl From<RecipeRequest> for RecipeInput {
    fn from(req: RecipeRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            category_id: req.category_id,
            is_public: req.is_public,
        }
    }
}

/// Create category request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Category name, trimmed by the service.
    #[validate(length(min = 1, message = "Category name is required"))]
    pub name: String,
}

/// Runs `validator` rules and converts the first failure into a validation error.
pub fn validate_body<T: Validate>(body: &T) -> Result<(), AppError> {
    body.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());
        AppError::validation(message)
    })
}
