//! Recipe create, update, delete, and toggle operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use recipebox_core::error::AppError;
use recipebox_core::events::{RecipeEventKind, View};
use recipebox_database::RecipeStore;
use recipebox_entity::engagement::{FavoriteState, LikeState};
use recipebox_entity::recipe::{NewRecipe, Recipe, RecipeUpdate};

use super::input::{RecipeInput, ValidRecipe};
use crate::context::RequestContext;
use crate::revalidation::Revalidator;

/// Performs every recipe mutation.
///
/// Each operation authorizes the caller, validates input, writes through
/// the store, and on success invalidates the feed cache and publishes a
/// revalidation event.
#[derive(Debug, Clone)]
pub struct RecipeService {
    /// Persistence gateway.
    store: Arc<dyn RecipeStore>,
    /// Post-mutation side effects.
    revalidator: Arc<Revalidator>,
}

impl RecipeService {
    /// Creates a new recipe service.
    pub fn new(store: Arc<dyn RecipeStore>, revalidator: Arc<Revalidator>) -> Self {
        Self { store, revalidator }
    }

    /// Creates a recipe owned by the caller.
    pub async fn create_recipe(
        &self,
        ctx: &RequestContext,
        input: RecipeInput,
    ) -> Result<Recipe, AppError> {
        let user_id = ctx.require_user()?;
        let valid = self.validate(input).await?;

        let recipe = self
            .store
            .insert_recipe(NewRecipe {
                owner_id: user_id,
                category_id: valid.category_id,
                title: valid.title,
                content: valid.content,
                visibility: valid.visibility,
            })
            .await?;

        info!(
            user_id = %user_id,
            recipe_id = %recipe.id,
            visibility = %recipe.visibility,
            "Recipe created"
        );

        self.revalidator
            .after_mutation(
                user_id,
                Some(recipe.id),
                RecipeEventKind::Created,
                vec![View::Dashboard, View::PublicFeed, View::Categories],
            )
            .await;

        Ok(recipe)
    }

    /// Overwrites an owned recipe's title, content, category, and visibility.
    pub async fn update_recipe(
        &self,
        ctx: &RequestContext,
        recipe_id: Uuid,
        input: RecipeInput,
    ) -> Result<Recipe, AppError> {
        let user_id = ctx.require_user()?;
        self.load_owned(user_id, recipe_id).await?;
        let valid = self.validate(input).await?;

        let recipe = self
            .store
            .update_recipe(
                recipe_id,
                RecipeUpdate {
                    category_id: valid.category_id,
                    title: valid.title,
                    content: valid.content,
                    visibility: valid.visibility,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found"))?;

        info!(user_id = %user_id, recipe_id = %recipe_id, "Recipe updated");

        self.revalidator
            .after_mutation(
                user_id,
                Some(recipe_id),
                RecipeEventKind::Updated,
                vec![
                    View::Dashboard,
                    View::PublicFeed,
                    View::RecipeDetail,
                    View::Categories,
                ],
            )
            .await;

        Ok(recipe)
    }

    /// Deletes an owned recipe together with its likes, favorites, and tag links.
    pub async fn delete_recipe(&self, ctx: &RequestContext, recipe_id: Uuid) -> Result<(), AppError> {
        let user_id = ctx.require_user()?;
        self.load_owned(user_id, recipe_id).await?;

        if !self.store.delete_recipe(recipe_id).await? {
            return Err(AppError::not_found("Recipe not found"));
        }

        info!(user_id = %user_id, recipe_id = %recipe_id, "Recipe deleted");

        self.revalidator
            .after_mutation(
                user_id,
                Some(recipe_id),
                RecipeEventKind::Deleted,
                vec![
                    View::Dashboard,
                    View::PublicFeed,
                    View::Favorites,
                    View::Categories,
                ],
            )
            .await;

        Ok(())
    }

    /// Flips an owned recipe between PUBLIC and PRIVATE.
    pub async fn toggle_visibility(
        &self,
        ctx: &RequestContext,
        recipe_id: Uuid,
    ) -> Result<Recipe, AppError> {
        let user_id = ctx.require_user()?;
        self.load_owned(user_id, recipe_id).await?;

        let recipe = self
            .store
            .toggle_visibility(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found"))?;

        info!(
            user_id = %user_id,
            recipe_id = %recipe_id,
            visibility = %recipe.visibility,
            "Recipe visibility toggled"
        );

        self.revalidator
            .after_mutation(
                user_id,
                Some(recipe_id),
                RecipeEventKind::VisibilityChanged,
                vec![View::Dashboard, View::PublicFeed, View::RecipeDetail],
            )
            .await;

        Ok(recipe)
    }

    /// Adds or removes the caller's favorite on any existing recipe.
    pub async fn toggle_favorite(
        &self,
        ctx: &RequestContext,
        recipe_id: Uuid,
    ) -> Result<FavoriteState, AppError> {
        let user_id = ctx.require_user()?;

        let state = self
            .store
            .toggle_favorite(user_id, recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found"))?;

        info!(
            user_id = %user_id,
            recipe_id = %recipe_id,
            favorited = state.favorited,
            "Favorite toggled"
        );

        self.revalidator
            .after_mutation(
                user_id,
                Some(recipe_id),
                RecipeEventKind::FavoriteToggled,
                vec![View::Favorites, View::Dashboard, View::PublicFeed],
            )
            .await;

        Ok(state)
    }

    /// Adds or removes the caller's like on a PUBLIC recipe.
    ///
    /// Missing and PRIVATE recipes are indistinguishable to the caller:
    /// both fail with `NotFound`.
    pub async fn toggle_like(
        &self,
        ctx: &RequestContext,
        recipe_id: Uuid,
    ) -> Result<LikeState, AppError> {
        let user_id = ctx.require_user()?;

        let state = self
            .store
            .toggle_like(user_id, recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found"))?;

        info!(
            user_id = %user_id,
            recipe_id = %recipe_id,
            liked = state.liked,
            likes_count = state.likes_count,
            "Like toggled"
        );

        self.revalidator
            .after_mutation(
                user_id,
                Some(recipe_id),
                RecipeEventKind::LikeToggled,
                vec![View::PublicFeed, View::RecipeDetail],
            )
            .await;

        Ok(state)
    }

    async fn load_owned(&self, user_id: Uuid, recipe_id: Uuid) -> Result<Recipe, AppError> {
        let recipe = self
            .store
            .find_recipe(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found"))?;

        if !recipe.is_owned_by(user_id) {
            return Err(AppError::forbidden("You can only modify your own recipes"));
        }
        Ok(recipe)
    }

    async fn validate(&self, input: RecipeInput) -> Result<ValidRecipe, AppError> {
        let valid = input.validate()?;
        if self.store.find_category(valid.category_id).await?.is_none() {
            return Err(AppError::validation("Selected category does not exist"));
        }
        Ok(valid)
    }
}
