//! Engagement entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's like on a public recipe. Unique per (user, recipe).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    /// The liking user.
    pub user_id: Uuid,
    /// The liked recipe.
    pub recipe_id: Uuid,
    /// When the like was recorded.
    pub created_at: DateTime<Utc>,
}

/// A user's bookmark on a recipe. Unique per (user, recipe).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// The user.
    pub user_id: Uuid,
    /// The bookmarked recipe.
    pub recipe_id: Uuid,
    /// When the favorite was recorded.
    pub created_at: DateTime<Utc>,
}

/// Result of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeState {
    /// Whether the caller likes the recipe after the toggle.
    pub liked: bool,
    /// Total likes after the toggle.
    pub likes_count: i64,
}

/// Result of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteState {
    /// Whether the recipe is a favorite after the toggle.
    pub favorited: bool,
}
