//! Shared test helpers for integration tests.
//!
//! The router runs on the in-memory store and the moka cache, so these
//! tests need neither PostgreSQL nor Redis.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use recipebox_api::{AppState, build_app};
use recipebox_auth::JwtEncoder;
use recipebox_cache::CacheManager;
use recipebox_core::config::AppConfig;
use recipebox_core::config::database::DatabaseConfig;
use recipebox_core::config::recipes::RecipesConfig;
use recipebox_database::{MemoryStore, RecipeStore};
use recipebox_entity::user::CreateUser;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store for direct inspection
    pub store: Arc<MemoryStore>,
    /// Application state shared with the router
    pub state: AppState,
    /// Session token signer
    pub encoder: JwtEncoder,
}

/// A user with a valid session token
pub struct TestUser {
    /// User ID
    pub id: Uuid,
    /// Bearer token
    pub token: String,
}

/// Configuration used by every test app
pub fn test_config() -> AppConfig {
    AppConfig {
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
        recipes: RecipesConfig::default(),
    }
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Create a test application with custom configuration
    pub async fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let cache = Arc::new(
            CacheManager::new(&config.cache)
                .await
                .expect("Failed to init cache"),
        );
        let encoder = JwtEncoder::new(&config.auth);

        let dyn_store: Arc<dyn RecipeStore> = store.clone();
        let state = AppState::new(config, dyn_store, cache);
        state
            .category_service
            .ensure_default_categories()
            .await
            .expect("Failed to seed categories");

        Self {
            router: build_app(state.clone()),
            store,
            state,
            encoder,
        }
    }

    /// Upsert a user and issue a session token for them
    pub async fn create_user(&self, name: &str) -> TestUser {
        let user = self
            .store
            .upsert_user(CreateUser {
                name: Some(name.to_string()),
                email: format!("{name}@example.com"),
            })
            .await
            .expect("Failed to create user");
        let issued = self.encoder.issue(&user).expect("Failed to issue token");
        TestUser {
            id: user.id,
            token: issued.token,
        }
    }

    /// Look up a category id by name
    pub async fn category_id(&self, name: &str) -> Uuid {
        self.store
            .list_category_options()
            .await
            .expect("Failed to list categories")
            .into_iter()
            .find(|c| c.name == name)
            .map(|c| c.id)
            .expect("Category not found")
    }

    /// Create a recipe through the API and return its id
    pub async fn create_recipe(&self, user: &TestUser, title: &str, is_public: bool) -> Uuid {
        let category_id = self.category_id("Food").await;
        let response = self
            .request(
                "POST",
                "/api/recipes",
                Some(serde_json::json!({
                    "title": title,
                    "content": format!("How to make {title}"),
                    "categoryId": category_id,
                    "isPublic": is_public,
                })),
                Some(&user.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("Missing recipe id")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Titles of the cards in `data.items` (paged) or `data` (plain list)
    pub fn titles(&self) -> Vec<String> {
        let data = &self.body["data"];
        let items = data.get("items").unwrap_or(data);
        items
            .as_array()
            .map(|cards| {
                cards
                    .iter()
                    .filter_map(|c| c["title"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
