//! Read-side recipe queries with a short-TTL cache for public listings.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use recipebox_cache::CacheManager;
use recipebox_cache::keys::{self, PUBLIC_FEED_TAG};
use recipebox_core::config::recipes::RecipesConfig;
use recipebox_core::error::AppError;
use recipebox_core::types::{FeedSort, PageRequest, PageResponse};
use recipebox_database::query::normalize_search;
use recipebox_database::{CardOrder, CardQuery, CardScope, RecipeStore};
use recipebox_entity::recipe::{RecipeCard, RecipeDetail};

use crate::context::RequestContext;

/// Largest accepted `limit` for the recent and popular lists.
const MAX_LIST_LIMIT: i64 = 50;

/// Parameters of a public feed page.
#[derive(Debug, Clone, Default)]
pub struct FeedRequest {
    /// 1-based page number. Values below 1 are treated as 1.
    pub page: i64,
    /// Search text; blank means no filter.
    pub search: Option<String>,
    /// Ordering.
    pub sort: FeedSort,
}

/// Serves recipe listings.
#[derive(Debug, Clone)]
pub struct FeedService {
    /// Persistence gateway.
    store: Arc<dyn RecipeStore>,
    /// Cache for public listings.
    cache: Arc<CacheManager>,
    /// Cards per page.
    page_size: u64,
    /// Lifetime of cached public listings.
    ttl: Duration,
    /// Default size of the recent and popular lists.
    default_limit: i64,
}

impl FeedService {
    /// Creates a new feed service.
    pub fn new(store: Arc<dyn RecipeStore>, cache: Arc<CacheManager>, config: &RecipesConfig) -> Self {
        Self {
            store,
            cache,
            page_size: config.feed_page_size.max(1),
            ttl: Duration::from_secs(config.feed_cache_ttl_seconds),
            default_limit: config.default_list_limit,
        }
    }

    /// One page of PUBLIC recipes with overlays for the caller.
    ///
    /// Pages are cached per (viewer, sort, page, search) under the public
    /// feed tag, so any recipe mutation drops every cached page.
    pub async fn public_feed(
        &self,
        ctx: &RequestContext,
        req: FeedRequest,
    ) -> Result<PageResponse<RecipeCard>, AppError> {
        let viewer = ctx.viewer();
        let page = PageRequest::new(req.page.max(1) as u64, self.page_size);
        let search = normalize_search(req.search.as_deref());
        let key = keys::public_feed(viewer, req.sort, page.page, search.as_deref());

        if let Some(cached) = self.cached::<PageResponse<RecipeCard>>(&key).await {
            return Ok(cached);
        }

        let query = CardQuery::new(CardScope::Public, req.sort.into())
            .viewer(viewer)
            .search(search.as_deref())
            .window(page.limit(), page.offset());
        let result = self.store.query_cards(&query).await?;
        let response = PageResponse::new(result.items, page.page, page.page_size, result.total);

        self.store_cached(&key, &response).await;
        Ok(response)
    }

    /// The newest PUBLIC recipes.
    pub async fn recent_recipes(
        &self,
        ctx: &RequestContext,
        limit: Option<i64>,
    ) -> Result<Vec<RecipeCard>, AppError> {
        self.public_list(ctx, FeedSort::Recent, limit).await
    }

    /// The most liked PUBLIC recipes.
    pub async fn popular_recipes(
        &self,
        ctx: &RequestContext,
        limit: Option<i64>,
    ) -> Result<Vec<RecipeCard>, AppError> {
        self.public_list(ctx, FeedSort::Popular, limit).await
    }

    /// The caller's own recipes, any visibility, most recently updated first.
    pub async fn list_my_recipes(
        &self,
        ctx: &RequestContext,
        page: i64,
        search: Option<&str>,
    ) -> Result<PageResponse<RecipeCard>, AppError> {
        let user_id = ctx.require_user()?;
        let page = PageRequest::new(page.max(1) as u64, self.page_size);

        let query = CardQuery::new(CardScope::OwnedBy(user_id), CardOrder::RecentlyUpdated)
            .viewer(Some(user_id))
            .search(search)
            .window(page.limit(), page.offset());
        let result = self.store.query_cards(&query).await?;
        Ok(PageResponse::new(
            result.items,
            page.page,
            page.page_size,
            result.total,
        ))
    }

    /// Every recipe the caller has favorited, most recently updated first.
    pub async fn list_favorites(&self, ctx: &RequestContext) -> Result<Vec<RecipeCard>, AppError> {
        let user_id = ctx.require_user()?;
        let query = CardQuery::new(CardScope::FavoritedBy(user_id), CardOrder::RecentlyUpdated)
            .viewer(Some(user_id));
        Ok(self.store.query_cards(&query).await?.items)
    }

    /// A PUBLIC recipe with its author and tags.
    ///
    /// Missing and PRIVATE recipes both fail with `NotFound`.
    pub async fn get_public_recipe(
        &self,
        ctx: &RequestContext,
        recipe_id: Uuid,
    ) -> Result<RecipeDetail, AppError> {
        let card = self
            .store
            .find_card(ctx.viewer(), recipe_id)
            .await?
            .filter(|card| card.visibility.is_public())
            .ok_or_else(|| AppError::not_found("Recipe not found"))?;

        let owner_name = self
            .store
            .find_user(card.owner_id)
            .await?
            .map(|user| user.display_name().to_string())
            .unwrap_or_default();
        let tags = self.store.tag_names(recipe_id).await?;

        Ok(RecipeDetail {
            card,
            owner_name,
            tags,
        })
    }

    async fn public_list(
        &self,
        ctx: &RequestContext,
        sort: FeedSort,
        limit: Option<i64>,
    ) -> Result<Vec<RecipeCard>, AppError> {
        let viewer = ctx.viewer();
        let limit = limit.unwrap_or(self.default_limit).clamp(1, MAX_LIST_LIMIT);
        let key = keys::public_list(viewer, sort, limit);

        if let Some(cached) = self.cached::<Vec<RecipeCard>>(&key).await {
            return Ok(cached);
        }

        let query = CardQuery::new(CardScope::Public, sort.into())
            .viewer(viewer)
            .window(limit as u64, 0);
        let items = self.store.query_cards(&query).await?.items;

        self.store_cached(&key, &items).await;
        Ok(items)
    }

    /// Cache read. Failures are logged and treated as a miss.
    async fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.get_json::<T>(key).await {
            Ok(Some(value)) => {
                debug!(key, "Feed cache hit");
                Some(value)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "Feed cache read failed");
                None
            }
        }
    }

    /// Cache write. Failures are logged and ignored.
    async fn store_cached<T: Serialize + Sync>(&self, key: &str, value: &T) {
        if let Err(e) = self
            .cache
            .set_json_tagged(key, value, self.ttl, &[PUBLIC_FEED_TAG])
            .await
        {
            warn!(key, error = %e, "Feed cache write failed");
        }
    }
}
