//! Like and favorite repository implementation.
//!
//! Both toggles run inside a transaction that first locks the recipe row,
//! so concurrent toggles on the same recipe are applied one at a time and
//! the returned state always reflects the committed rows.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use recipebox_core::result::AppResult;
use recipebox_entity::engagement::{FavoriteState, LikeState};
use recipebox_entity::recipe::Visibility;

use crate::connection::db_error;

/// Repository for the likes and favorites join tables.
#[derive(Debug, Clone)]
pub struct EngagementRepository {
    pool: PgPool,
}

impl EngagementRepository {
    /// Create a new engagement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Toggle a favorite. Returns `None` if the recipe does not exist.
    pub async fn toggle_favorite(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> AppResult<Option<FavoriteState>> {
        let mut tx = self.begin().await?;
        if lock_recipe(&mut tx, recipe_id).await?.is_none() {
            return Ok(None);
        }

        let removed = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND recipe_id = $2")
            .bind(user_id)
            .bind(recipe_id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to remove favorite"))?
            .rows_affected();

        if removed == 0 {
            sqlx::query(
                "INSERT INTO favorites (user_id, recipe_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(user_id)
            .bind(recipe_id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to add favorite"))?;
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit favorite toggle"))?;
        Ok(Some(FavoriteState {
            favorited: removed == 0,
        }))
    }

    /// Toggle a like. Returns `None` if the recipe is missing or not public.
    pub async fn toggle_like(&self, user_id: Uuid, recipe_id: Uuid) -> AppResult<Option<LikeState>> {
        let mut tx = self.begin().await?;
        match lock_recipe(&mut tx, recipe_id).await? {
            Some(Visibility::Public) => {}
            _ => return Ok(None),
        }

        let removed = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND recipe_id = $2")
            .bind(user_id)
            .bind(recipe_id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to remove like"))?
            .rows_affected();

        if removed == 0 {
            sqlx::query(
                "INSERT INTO likes (user_id, recipe_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(user_id)
            .bind(recipe_id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to add like"))?;
        }

        let likes_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE recipe_id = $1")
            .bind(recipe_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error("Failed to count likes"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit like toggle"))?;
        Ok(Some(LikeState {
            liked: removed == 0,
            likes_count,
        }))
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))
    }
}

/// Lock the recipe row and return its visibility, or `None` if it is missing.
async fn lock_recipe(
    tx: &mut Transaction<'static, Postgres>,
    recipe_id: Uuid,
) -> AppResult<Option<Visibility>> {
    sqlx::query_scalar::<_, Visibility>("SELECT visibility FROM recipes WHERE id = $1 FOR UPDATE")
        .bind(recipe_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(db_error("Failed to lock recipe"))
}
