//! Category listing, default bootstrap, and capped creation.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use recipebox_core::config::recipes::RecipesConfig;
use recipebox_core::error::AppError;
use recipebox_core::events::{RecipeEventKind, View};
use recipebox_database::RecipeStore;
use recipebox_entity::category::model::MAX_CATEGORY_NAME_LEN;
use recipebox_entity::category::{Category, CategoryOption, CategoryWithCount};

use crate::context::RequestContext;
use crate::revalidation::Revalidator;

/// Manages the category catalog.
#[derive(Debug, Clone)]
pub struct CategoryService {
    /// Persistence gateway.
    store: Arc<dyn RecipeStore>,
    /// Post-mutation side effects.
    revalidator: Arc<Revalidator>,
    /// Names guaranteed to exist after bootstrap.
    defaults: Arc<Vec<String>>,
    /// Maximum number of categories.
    max_categories: i64,
    /// Set once the defaults have been ensured in this process.
    defaults_ready: Arc<OnceCell<()>>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(
        store: Arc<dyn RecipeStore>,
        revalidator: Arc<Revalidator>,
        config: &RecipesConfig,
    ) -> Self {
        Self {
            store,
            revalidator,
            defaults: Arc::new(config.default_categories.clone()),
            max_categories: config.max_categories,
            defaults_ready: Arc::new(OnceCell::new()),
        }
    }

    /// Inserts every default category that does not exist yet.
    ///
    /// Idempotent. Returns the number of categories inserted.
    pub async fn ensure_default_categories(&self) -> Result<u64, AppError> {
        let inserted = self.store.ensure_categories(&self.defaults).await?;
        let _ = self.defaults_ready.set(());
        if inserted > 0 {
            info!(inserted, "Default categories created");
        }
        Ok(inserted)
    }

    /// Lists every category with its recipe count, ordered by name.
    pub async fn list_categories(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<CategoryWithCount>, AppError> {
        ctx.require_user()?;
        self.defaults_ready
            .get_or_try_init(|| async {
                self.store.ensure_categories(&self.defaults).await.map(|_| ())
            })
            .await?;
        self.store.list_categories().await
    }

    /// Lists `{id, name}` choices for the recipe form, ordered by name.
    pub async fn available_categories(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<CategoryOption>, AppError> {
        ctx.require_user()?;
        self.store.list_category_options().await
    }

    /// Creates a category.
    ///
    /// The name is trimmed and must be 1 to 100 characters. Fails with
    /// `LimitExceeded` once the configured maximum exists and with
    /// `AlreadyExists` on an exact name match.
    pub async fn create_category(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<Category, AppError> {
        let user_id = ctx.require_user()?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Category name is required"));
        }
        if name.chars().count() > MAX_CATEGORY_NAME_LEN {
            return Err(AppError::validation(format!(
                "Category name must be at most {MAX_CATEGORY_NAME_LEN} characters"
            )));
        }

        if self.store.count_categories().await? >= self.max_categories {
            return Err(self.limit_error());
        }
        if self.store.category_name_exists(name).await? {
            return Err(AppError::already_exists(format!(
                "Category '{name}' already exists"
            )));
        }

        let category = self
            .store
            .insert_category_capped(name, self.max_categories)
            .await?
            .ok_or_else(|| self.limit_error())?;

        info!(
            user_id = %user_id,
            category_id = %category.id,
            name = %category.name,
            "Category created"
        );

        self.revalidator
            .after_mutation(
                user_id,
                None,
                RecipeEventKind::CategoryCreated,
                vec![View::Categories, View::Dashboard, View::PublicFeed],
            )
            .await;

        Ok(category)
    }

    fn limit_error(&self) -> AppError {
        AppError::limit_exceeded(format!(
            "A maximum of {} categories is allowed",
            self.max_categories
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use recipebox_core::error::ErrorKind;

    #[tokio::test]
    async fn test_defaults_exist_after_bootstrap() {
        let h = Harness::new().await;
        let alice = h.user("alice").await;
        let names: Vec<String> = h
            .categories
            .list_categories(&alice)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Dessert", "Drinks", "Food"]);

        assert_eq!(h.categories.ensure_default_categories().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_requires_user() {
        let h = Harness::new().await;
        let err = h
            .categories
            .list_categories(&RequestContext::anonymous())
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Unauthenticated));
        let err = h
            .categories
            .available_categories(&RequestContext::anonymous())
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Unauthenticated));
    }

    #[tokio::test]
    async fn test_list_counts_recipes() {
        let h = Harness::new().await;
        let alice = h.user("alice").await;
        h.recipes
            .create_recipe(&alice, h.input("Soup", false))
            .await
            .unwrap();

        let food = h
            .categories
            .list_categories(&alice)
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Food")
            .unwrap();
        assert_eq!(food.recipe_count, 1);
    }

    #[tokio::test]
    async fn test_twenty_first_category_hits_limit() {
        let h = Harness::new().await;
        let alice = h.user("alice").await;

        // Three defaults already exist.
        for i in 0..17 {
            h.categories
                .create_category(&alice, &format!("Category {i}"))
                .await
                .unwrap();
        }
        assert_eq!(h.store.count_categories().await.unwrap(), 20);

        let err = h
            .categories
            .create_category(&alice, "One Too Many")
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::LimitExceeded));
        assert_eq!(h.store.count_categories().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_duplicate_after_trim_rejected() {
        let h = Harness::new().await;
        let alice = h.user("alice").await;

        let err = h
            .categories
            .create_category(&alice, "  Food  ")
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::AlreadyExists));
        assert_eq!(h.store.count_categories().await.unwrap(), 3);

        // Case-sensitive: a differently cased name is a new category.
        h.categories.create_category(&alice, "food").await.unwrap();
    }

    #[tokio::test]
    async fn test_name_length_validation() {
        let h = Harness::new().await;
        let alice = h.user("alice").await;

        let err = h.categories.create_category(&alice, "   ").await.unwrap_err();
        assert!(err.is(ErrorKind::Validation));

        let long = "x".repeat(101);
        let err = h.categories.create_category(&alice, &long).await.unwrap_err();
        assert!(err.is(ErrorKind::Validation));

        let exact = "y".repeat(100);
        h.categories.create_category(&alice, &exact).await.unwrap();
    }
}
