//! Shared fixtures for service unit tests.

use std::sync::Arc;

use uuid::Uuid;

use recipebox_cache::CacheManager;
use recipebox_cache::memory::MemoryCacheProvider;
use recipebox_core::config::cache::MemoryCacheConfig;
use recipebox_core::config::recipes::RecipesConfig;
use recipebox_database::{MemoryStore, RecipeStore};
use recipebox_entity::user::CreateUser;

use crate::category::CategoryService;
use crate::context::RequestContext;
use crate::feed::FeedService;
use crate::recipe::{RecipeInput, RecipeService};
use crate::revalidation::{RevalidationBus, Revalidator};

pub(crate) struct Harness {
    pub store: Arc<MemoryStore>,
    pub cache: Arc<CacheManager>,
    pub revalidator: Arc<Revalidator>,
    pub recipes: RecipeService,
    pub categories: CategoryService,
    pub feed: FeedService,
    pub food: Uuid,
}

impl Harness {
    pub async fn new() -> Self {
        Self::with_config(RecipesConfig::default()).await
    }

    pub async fn with_config(config: RecipesConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig::default());
        let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));
        let revalidator = Arc::new(Revalidator::new(cache.clone(), RevalidationBus::new(64)));
        let dyn_store: Arc<dyn RecipeStore> = store.clone();

        let categories = CategoryService::new(dyn_store.clone(), revalidator.clone(), &config);
        categories.ensure_default_categories().await.unwrap();
        let food = store
            .list_category_options()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Food")
            .map(|c| c.id)
            .unwrap_or_else(Uuid::nil);

        Self {
            recipes: RecipeService::new(dyn_store.clone(), revalidator.clone()),
            feed: FeedService::new(dyn_store, cache.clone(), &config),
            categories,
            store,
            cache,
            revalidator,
            food,
        }
    }

    pub async fn user(&self, name: &str) -> RequestContext {
        let user = self
            .store
            .upsert_user(CreateUser {
                name: Some(name.to_string()),
                email: format!("{name}@example.com"),
            })
            .await
            .unwrap();
        RequestContext::authenticated(user.id)
    }

    pub fn input(&self, title: &str, is_public: bool) -> RecipeInput {
        RecipeInput {
            title: title.to_string(),
            content: format!("How to make {title}"),
            category_id: Some(self.food),
            is_public,
        }
    }
}
