//! Tag repository implementation. Tags are read-only.

use sqlx::PgPool;
use uuid::Uuid;

use recipebox_core::result::AppResult;

use crate::connection::db_error;

/// Repository for tag lookups.
#[derive(Debug, Clone)]
pub struct TagRepository {
    pool: PgPool,
}

impl TagRepository {
    /// Create a new tag repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Tag names attached to a recipe, alphabetically.
    pub async fn names_for_recipe(&self, recipe_id: Uuid) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"SELECT t.name FROM tags t
               JOIN recipe_tags rt ON rt.tag_id = t.id
               WHERE rt.recipe_id = $1
               ORDER BY t.name ASC"#,
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to load recipe tags"))
    }
}
