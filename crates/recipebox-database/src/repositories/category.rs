//! Category repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use recipebox_core::error::{AppError, ErrorKind};
use recipebox_core::result::AppResult;
use recipebox_entity::category::{Category, CategoryOption, CategoryWithCount};

use crate::connection::db_error;

/// Repository for category queries and capped inserts.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a category by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find category"))
    }

    /// Check whether a category with exactly this name exists.
    pub async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to check category name"))
    }

    /// Count all categories.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count categories"))
    }

    /// List every category with its recipe count, ordered by name.
    pub async fn find_all_with_counts(&self) -> AppResult<Vec<CategoryWithCount>> {
        sqlx::query_as::<_, CategoryWithCount>(
            r#"SELECT c.id, c.name, c.created_at, COUNT(r.id) AS recipe_count
               FROM categories c
               LEFT JOIN recipes r ON r.category_id = c.id
               GROUP BY c.id
               ORDER BY c.name ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list categories"))
    }

    /// List every category as an `{id, name}` pair, ordered by name.
    pub async fn find_options(&self) -> AppResult<Vec<CategoryOption>> {
        sqlx::query_as::<_, CategoryOption>("SELECT id, name FROM categories ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list category options"))
    }

    /// Insert each missing name. Returns the number of rows inserted.
    pub async fn insert_missing(&self, names: &[String]) -> AppResult<u64> {
        let mut inserted = 0;
        for name in names {
            let result =
                sqlx::query("INSERT INTO categories (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
                    .bind(name)
                    .execute(&self.pool)
                    .await
                    .map_err(db_error("Failed to insert default category"))?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }

    /// Insert a category while fewer than `max` exist.
    ///
    /// The table is locked for the duration of the insert so concurrent
    /// callers cannot both pass the count check.
    pub async fn insert_capped(&self, name: &str, max: i64) -> AppResult<Option<Category>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin category insert"))?;

        sqlx::query("LOCK TABLE categories IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to lock categories"))?;

        let category = sqlx::query_as::<_, Category>(
            r#"INSERT INTO categories (name)
               SELECT $1 WHERE (SELECT COUNT(*) FROM categories) < $2
               RETURNING *"#,
        )
        .bind(name)
        .bind(max)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|d| d.is_unique_violation())
            {
                AppError::with_source(
                    ErrorKind::AlreadyExists,
                    format!("Category '{name}' already exists"),
                    e,
                )
            } else {
                AppError::with_source(ErrorKind::Transient, "Failed to insert category", e)
            }
        })?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit category insert"))?;
        Ok(category)
    }
}
