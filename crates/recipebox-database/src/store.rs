//! The persistence gateway used by the service layer.

use async_trait::async_trait;
use uuid::Uuid;

use recipebox_core::result::AppResult;
use recipebox_entity::category::{Category, CategoryOption, CategoryWithCount};
use recipebox_entity::engagement::{FavoriteState, LikeState};
use recipebox_entity::recipe::{NewRecipe, Recipe, RecipeCard, RecipeUpdate};
use recipebox_entity::user::{CreateUser, User};

use crate::query::{CardPage, CardQuery};

/// Typed access to users, categories, recipes, tags, likes, and favorites.
///
/// Implementations must make each toggle atomic with respect to other
/// toggles on the same recipe, and must remove a recipe's like, favorite,
/// and tag rows when the recipe is deleted.
#[async_trait]
pub trait RecipeStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by ID.
    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Insert a user, or refresh the name of the user with the same email.
    async fn upsert_user(&self, data: CreateUser) -> AppResult<User>;

    /// Insert each name that does not exist yet. Returns how many were inserted.
    async fn ensure_categories(&self, names: &[String]) -> AppResult<u64>;

    /// All categories with their recipe counts, ordered by name.
    async fn list_categories(&self) -> AppResult<Vec<CategoryWithCount>>;

    /// All categories as form choices, ordered by name.
    async fn list_category_options(&self) -> AppResult<Vec<CategoryOption>>;

    /// Find a category by ID.
    async fn find_category(&self, id: Uuid) -> AppResult<Option<Category>>;

    /// Whether a category with exactly this name exists.
    async fn category_name_exists(&self, name: &str) -> AppResult<bool>;

    /// Total number of categories.
    async fn count_categories(&self) -> AppResult<i64>;

    /// Insert a category unless `max` categories already exist.
    ///
    /// Returns `None` when the cap was reached. A duplicate name fails with
    /// `AlreadyExists`.
    async fn insert_category_capped(&self, name: &str, max: i64) -> AppResult<Option<Category>>;

    /// Find a recipe by ID.
    async fn find_recipe(&self, id: Uuid) -> AppResult<Option<Recipe>>;

    /// Insert a recipe.
    async fn insert_recipe(&self, data: NewRecipe) -> AppResult<Recipe>;

    /// Overwrite a recipe's editable fields and bump `updated_at`.
    async fn update_recipe(&self, id: Uuid, data: RecipeUpdate) -> AppResult<Option<Recipe>>;

    /// Delete a recipe and its join rows. Returns whether a row was removed.
    async fn delete_recipe(&self, id: Uuid) -> AppResult<bool>;

    /// Flip PUBLIC and PRIVATE in one step and bump `updated_at`.
    async fn toggle_visibility(&self, id: Uuid) -> AppResult<Option<Recipe>>;

    /// Add or remove the (user, recipe) favorite. `None` if the recipe is missing.
    async fn toggle_favorite(&self, user_id: Uuid, recipe_id: Uuid)
    -> AppResult<Option<FavoriteState>>;

    /// Add or remove the (user, recipe) like.
    ///
    /// `None` if the recipe is missing or not PUBLIC; no like row is touched
    /// in that case.
    async fn toggle_like(&self, user_id: Uuid, recipe_id: Uuid) -> AppResult<Option<LikeState>>;

    /// Run a card listing.
    async fn query_cards(&self, query: &CardQuery) -> AppResult<CardPage>;

    /// A single card with overlays for `viewer`, any visibility.
    async fn find_card(&self, viewer: Option<Uuid>, id: Uuid) -> AppResult<Option<RecipeCard>>;

    /// Tag names attached to a recipe, alphabetically.
    async fn tag_names(&self, recipe_id: Uuid) -> AppResult<Vec<String>>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
