//! Recipe form input and its validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use recipebox_core::error::AppError;
use recipebox_entity::recipe::Visibility;

/// The fields submitted when creating or editing a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeInput {
    /// Title, trimmed before validation.
    pub title: String,
    /// Body, trimmed before validation.
    pub content: String,
    /// Selected category.
    pub category_id: Option<Uuid>,
    /// Whether the recipe should be listed publicly.
    pub is_public: bool,
}

/// Input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecipe {
    /// Trimmed title.
    pub title: String,
    /// Trimmed content.
    pub content: String,
    /// Selected category.
    pub category_id: Uuid,
    /// Visibility derived from the public flag.
    pub visibility: Visibility,
}

impl RecipeInput {
    /// Trims and checks the form fields. Category existence is checked by the service.
    pub fn validate(self) -> Result<ValidRecipe, AppError> {
        let title = self.title.trim();
        let content = self.content.trim();

        if title.is_empty() || content.is_empty() {
            return Err(AppError::validation("Title and content are required"));
        }
        let category_id = self
            .category_id
            .ok_or_else(|| AppError::validation("Please select a category"))?;

        Ok(ValidRecipe {
            title: title.to_string(),
            content: content.to_string(),
            category_id,
            visibility: Visibility::from_public_flag(self.is_public),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_core::error::ErrorKind;

    fn input(title: &str, content: &str, category: Option<Uuid>) -> RecipeInput {
        RecipeInput {
            title: title.into(),
            content: content.into(),
            category_id: category,
            is_public: true,
        }
    }

    #[test]
    fn test_trims_fields() {
        let id = Uuid::new_v4();
        let valid = input("  Soup ", "\tBoil\n", Some(id)).validate().unwrap();
        assert_eq!(valid.title, "Soup");
        assert_eq!(valid.content, "Boil");
        assert_eq!(valid.visibility, Visibility::Public);
    }

    #[test]
    fn test_blank_fields_rejected() {
        let id = Some(Uuid::new_v4());
        for (title, content) in [("", "x"), ("x", ""), ("   ", "x"), ("x", " \n ")] {
            let err = input(title, content, id).validate().unwrap_err();
            assert!(err.is(ErrorKind::Validation));
        }
    }

    #[test]
    fn test_missing_category_rejected() {
        let err = input("Soup", "Boil", None).validate().unwrap_err();
        assert!(err.is(ErrorKind::Validation));
    }
}
