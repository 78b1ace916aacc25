//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Maximum category name length in characters.
pub const MAX_CATEGORY_NAME_LEN: usize = 100;

/// A recipe category. Categories are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// Unique category name.
    pub name: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// A category together with the number of recipes filed under it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithCount {
    /// Unique category identifier.
    pub id: Uuid,
    /// Category name.
    pub name: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// Number of recipes in this category, across all owners and visibilities.
    pub recipe_count: i64,
}

/// A selectable category choice for the recipe form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CategoryOption {
    /// Category identifier.
    pub id: Uuid,
    /// Category name.
    pub name: String,
}

impl From<Category> for CategoryOption {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}
