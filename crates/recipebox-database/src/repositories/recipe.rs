//! Recipe repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use recipebox_core::result::AppResult;
use recipebox_entity::recipe::{NewRecipe, Recipe, RecipeUpdate};

use crate::connection::db_error;

/// Repository for single-row recipe mutations.
#[derive(Debug, Clone)]
pub struct RecipeRepository {
    pool: PgPool,
}

impl RecipeRepository {
    /// Create a new recipe repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a recipe by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find recipe"))
    }

    /// Insert a new recipe.
    pub async fn create(&self, data: &NewRecipe) -> AppResult<Recipe> {
        sqlx::query_as::<_, Recipe>(
            r#"INSERT INTO recipes (owner_id, category_id, title, content, visibility)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING *"#,
        )
        .bind(data.owner_id)
        .bind(data.category_id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.visibility)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create recipe"))
    }

    /// Overwrite the editable fields of a recipe.
    pub async fn update(&self, id: Uuid, data: &RecipeUpdate) -> AppResult<Option<Recipe>> {
        sqlx::query_as::<_, Recipe>(
            r#"UPDATE recipes
               SET category_id = $2, title = $3, content = $4, visibility = $5, updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(data.category_id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.visibility)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update recipe"))
    }

    /// Delete a recipe. Likes, favorites, and tag links cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete recipe"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Flip visibility in a single statement.
    pub async fn toggle_visibility(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        sqlx::query_as::<_, Recipe>(
            r#"UPDATE recipes
               SET visibility = CASE visibility
                       WHEN 'public'::recipe_visibility THEN 'private'::recipe_visibility
                       ELSE 'public'::recipe_visibility
                   END,
                   updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to toggle recipe visibility"))
    }
}
