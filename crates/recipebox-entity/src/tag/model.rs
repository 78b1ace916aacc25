//! Tag entity model. Tags are read-only to the application.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named label attached to recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tag {
    /// Tag identifier.
    pub id: Uuid,
    /// Unique tag name.
    pub name: String,
}

/// Join row between a recipe and a tag.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTag {
    /// The recipe.
    pub recipe_id: Uuid,
    /// The tag.
    pub tag_id: Uuid,
}
