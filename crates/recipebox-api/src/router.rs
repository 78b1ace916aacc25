//! Route definitions for the RecipeBox HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router without the outer middleware stack.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(category_routes())
        .merge(recipe_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Liveness and backend health
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// The caller's profile
fn user_routes() -> Router<AppState> {
    Router::new().route("/me", get(handlers::user::me))
}

/// Category catalog
fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(handlers::category::list_categories).post(handlers::category::create_category),
        )
        .route(
            "/categories/available",
            get(handlers::category::available_categories),
        )
}

/// Listings, detail, mutations, and engagement toggles
fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", post(handlers::recipe::create_recipe))
        .route("/recipes/public", get(handlers::feed::public_feed))
        .route("/recipes/recent", get(handlers::feed::recent_recipes))
        .route("/recipes/popular", get(handlers::feed::popular_recipes))
        .route("/recipes/mine", get(handlers::feed::my_recipes))
        .route("/recipes/favorites", get(handlers::feed::favorites))
        .route(
            "/recipes/{id}",
            get(handlers::feed::get_recipe)
                .put(handlers::recipe::update_recipe)
                .delete(handlers::recipe::delete_recipe),
        )
        .route(
            "/recipes/{id}/visibility",
            post(handlers::recipe::toggle_visibility),
        )
        .route(
            "/recipes/{id}/favorite",
            post(handlers::recipe::toggle_favorite),
        )
        .route("/recipes/{id}/like", post(handlers::like::toggle_like))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use recipebox_cache::CacheManager;
    use recipebox_cache::memory::MemoryCacheProvider;
    use recipebox_core::config::AppConfig;
    use recipebox_core::config::cache::MemoryCacheConfig;
    use recipebox_core::config::database::DatabaseConfig;
    use recipebox_database::MemoryStore;

    fn state() -> AppState {
        let config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                url: "postgres://localhost/recipebox_test".into(),
                max_connections: 1,
                min_connections: 0,
                connect_timeout_seconds: 1,
                run_migrations: false,
            },
            cache: Default::default(),
            auth: Default::default(),
            logging: Default::default(),
            recipes: Default::default(),
        };
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig::default());
        let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));
        AppState::new(config, Arc::new(MemoryStore::new()), cache)
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = build_router(state())
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = build_router(state())
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
