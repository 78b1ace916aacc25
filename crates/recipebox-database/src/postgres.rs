//! PostgreSQL implementation of [`RecipeStore`].

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use recipebox_core::result::AppResult;
use recipebox_entity::category::{Category, CategoryOption, CategoryWithCount};
use recipebox_entity::engagement::{FavoriteState, LikeState};
use recipebox_entity::recipe::{NewRecipe, Recipe, RecipeCard, RecipeUpdate};
use recipebox_entity::user::{CreateUser, User};

use crate::connection::db_error;
use crate::query::{CardPage, CardQuery};
use crate::repositories::{
    CategoryRepository, EngagementRepository, FeedRepository, RecipeRepository, TagRepository,
    UserRepository,
};
use crate::store::RecipeStore;

/// A [`RecipeStore`] backed by the per-table PostgreSQL repositories.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
    users: UserRepository,
    categories: CategoryRepository,
    recipes: RecipeRepository,
    engagement: EngagementRepository,
    feed: FeedRepository,
    tags: TagRepository,
}

impl PgStore {
    /// Build the store and its repositories over a shared pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool.clone()),
            recipes: RecipeRepository::new(pool.clone()),
            engagement: EngagementRepository::new(pool.clone()),
            feed: FeedRepository::new(pool.clone()),
            tags: TagRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl RecipeStore for PgStore {
    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn upsert_user(&self, data: CreateUser) -> AppResult<User> {
        self.users.upsert(&data).await
    }

    async fn ensure_categories(&self, names: &[String]) -> AppResult<u64> {
        self.categories.insert_missing(names).await
    }

    async fn list_categories(&self) -> AppResult<Vec<CategoryWithCount>> {
        self.categories.find_all_with_counts().await
    }

    async fn list_category_options(&self) -> AppResult<Vec<CategoryOption>> {
        self.categories.find_options().await
    }

    async fn find_category(&self, id: Uuid) -> AppResult<Option<Category>> {
        self.categories.find_by_id(id).await
    }

    async fn category_name_exists(&self, name: &str) -> AppResult<bool> {
        self.categories.exists_by_name(name).await
    }

    async fn count_categories(&self) -> AppResult<i64> {
        self.categories.count().await
    }

    async fn insert_category_capped(&self, name: &str, max: i64) -> AppResult<Option<Category>> {
        self.categories.insert_capped(name, max).await
    }

    async fn find_recipe(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        self.recipes.find_by_id(id).await
    }

    async fn insert_recipe(&self, data: NewRecipe) -> AppResult<Recipe> {
        self.recipes.create(&data).await
    }

    async fn update_recipe(&self, id: Uuid, data: RecipeUpdate) -> AppResult<Option<Recipe>> {
        self.recipes.update(id, &data).await
    }

    async fn delete_recipe(&self, id: Uuid) -> AppResult<bool> {
        self.recipes.delete(id).await
    }

    async fn toggle_visibility(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        self.recipes.toggle_visibility(id).await
    }

    async fn toggle_favorite(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> AppResult<Option<FavoriteState>> {
        self.engagement.toggle_favorite(user_id, recipe_id).await
    }

    async fn toggle_like(&self, user_id: Uuid, recipe_id: Uuid) -> AppResult<Option<LikeState>> {
        self.engagement.toggle_like(user_id, recipe_id).await
    }

    async fn query_cards(&self, query: &CardQuery) -> AppResult<CardPage> {
        self.feed.query(query).await
    }

    async fn find_card(&self, viewer: Option<Uuid>, id: Uuid) -> AppResult<Option<RecipeCard>> {
        self.feed.find_by_id(viewer, id).await
    }

    async fn tag_names(&self, recipe_id: Uuid) -> AppResult<Vec<String>> {
        self.tags.names_for_recipe(recipe_id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(db_error("Health check failed"))
    }
}
