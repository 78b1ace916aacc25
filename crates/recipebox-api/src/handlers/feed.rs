//! Recipe listing and detail handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use recipebox_core::types::PageResponse;
use recipebox_entity::recipe::{RecipeCard, RecipeDetail};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{Caller, FeedParams, LimitParams, MineParams, parse_recipe_id};
use crate::state::AppState;

/// GET /api/recipes/public?page&q&sort
pub async fn public_feed(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<FeedParams>,
) -> Result<Json<ApiResponse<PageResponse<RecipeCard>>>, ApiError> {
    let page = state
        .feed_service
        .public_feed(&caller, params.into_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/recipes/recent?limit
pub async fn recent_recipes(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<LimitParams>,
) -> Result<Json<ApiResponse<Vec<RecipeCard>>>, ApiError> {
    let cards = state
        .feed_service
        .recent_recipes(&caller, params.limit)
        .await?;
    Ok(Json(ApiResponse::ok(cards)))
}

/// GET /api/recipes/popular?limit
pub async fn popular_recipes(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<LimitParams>,
) -> Result<Json<ApiResponse<Vec<RecipeCard>>>, ApiError> {
    let cards = state
        .feed_service
        .popular_recipes(&caller, params.limit)
        .await?;
    Ok(Json(ApiResponse::ok(cards)))
}

/// GET /api/recipes/mine?page&q
pub async fn my_recipes(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<MineParams>,
) -> Result<Json<ApiResponse<PageResponse<RecipeCard>>>, ApiError> {
    let page = state
        .feed_service
        .list_my_recipes(&caller, params.page.unwrap_or(1), params.q.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/recipes/favorites
pub async fn favorites(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ApiResponse<Vec<RecipeCard>>>, ApiError> {
    let cards = state.feed_service.list_favorites(&caller).await?;
    Ok(Json(ApiResponse::ok(cards)))
}

/// GET /api/recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<RecipeDetail>>, ApiError> {
    let id = parse_recipe_id(&id)?;
    let detail = state.feed_service.get_public_recipe(&caller, id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}
