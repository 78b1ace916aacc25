//! Recipe read models returned by feed and detail queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::visibility::Visibility;

/// A recipe as rendered in a list, with per-viewer overlays.
///
/// `liked_by_me` and `favorited_by_me` are always `false` for an anonymous
/// viewer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    /// Recipe identifier.
    pub id: Uuid,
    /// The author.
    pub owner_id: Uuid,
    /// Category identifier.
    pub category_id: Uuid,
    /// Category name.
    pub category_name: String,
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
    /// Total number of likes.
    pub likes_count: i64,
    /// Whether the viewer has liked the recipe.
    pub liked_by_me: bool,
    /// Whether the viewer has favorited the recipe.
    pub favorited_by_me: bool,
}

/// A single public recipe with its author and tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    /// The card fields.
    #[serde(flatten)]
    pub card: RecipeCard,
    /// Author display name.
    pub owner_name: String,
    /// Tag names, alphabetically.
    pub tags: Vec<String>,
}
