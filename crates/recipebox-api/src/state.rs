//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use recipebox_auth::JwtDecoder;
use recipebox_cache::CacheManager;
use recipebox_core::config::AppConfig;
use recipebox_database::RecipeStore;
use recipebox_service::{
    CategoryService, FeedService, RecipeService, RevalidationBus, Revalidator, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Persistence gateway (PostgreSQL or in-memory)
    pub store: Arc<dyn RecipeStore>,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT session token decoder
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Cache invalidation and revalidation events
    pub revalidator: Arc<Revalidator>,
    /// Recipe mutations
    pub recipe_service: Arc<RecipeService>,
    /// Category catalog
    pub category_service: Arc<CategoryService>,
    /// Listings and recipe detail
    pub feed_service: Arc<FeedService>,
    /// The caller's profile
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wires every service on top of a store and a cache.
    pub fn new(config: AppConfig, store: Arc<dyn RecipeStore>, cache: Arc<CacheManager>) -> Self {
        let revalidator = Arc::new(Revalidator::new(
            Arc::clone(&cache),
            RevalidationBus::default(),
        ));
        let recipe_service = Arc::new(RecipeService::new(
            Arc::clone(&store),
            Arc::clone(&revalidator),
        ));
        let category_service = Arc::new(CategoryService::new(
            Arc::clone(&store),
            Arc::clone(&revalidator),
            &config.recipes,
        ));
        let feed_service = Arc::new(FeedService::new(
            Arc::clone(&store),
            Arc::clone(&cache),
            &config.recipes,
        ));
        let user_service = Arc::new(UserService::new(Arc::clone(&store)));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        Self {
            config: Arc::new(config),
            store,
            cache,
            jwt_decoder,
            revalidator,
            recipe_service,
            category_service,
            feed_service,
            user_service,
        }
    }
}
