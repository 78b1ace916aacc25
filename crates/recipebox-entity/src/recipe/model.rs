//! Recipe entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::visibility::Visibility;

/// A recipe row. The owner never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier.
    pub id: Uuid,
    /// The author.
    pub owner_id: Uuid,
    /// The category the recipe is filed under.
    pub category_id: Uuid,
    /// Recipe title.
    pub title: String,
    /// Recipe body.
    pub content: String,
    /// Public or private.
    pub visibility: Visibility,
    /// When the recipe was created.
    pub created_at: DateTime<Utc>,
    /// When the recipe was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Check whether `user_id` owns this recipe.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    /// Check if the recipe is public.
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }
}

/// Data required to insert a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecipe {
    /// The author.
    pub owner_id: Uuid,
    /// Target category.
    pub category_id: Uuid,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Trimmed, non-empty content.
    pub content: String,
    /// Initial visibility.
    pub visibility: Visibility,
}

/// The fields an owner may overwrite on an existing recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeUpdate {
    /// New category.
    pub category_id: Uuid,
    /// New title.
    pub title: String,
    /// New content.
    pub content: String,
    /// New visibility.
    pub visibility: Visibility,
}
