//! Recipe mutation handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use recipebox_entity::engagement::FavoriteState;
use recipebox_entity::recipe::Recipe;

use crate::dto::request::{RecipeRequest, validate_body};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{Caller, json_body, parse_recipe_id};
use crate::state::AppState;

/// POST /api/recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<RecipeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Recipe>>), ApiError> {
    caller.require_user()?;
    let req = json_body(body)?;
    validate_body(&req)?;

    let recipe = state
        .recipe_service
        .create_recipe(&caller, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(recipe))))
}

/// PUT /api/recipes/{id}
pub async fn update_recipe(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    body: Result<Json<RecipeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Recipe>>, ApiError> {
    caller.require_user()?;
    let id = parse_recipe_id(&id)?;
    let req = json_body(body)?;
    validate_body(&req)?;

    let recipe = state
        .recipe_service
        .update_recipe(&caller, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(recipe)))
}

/// DELETE /api/recipes/{id}
pub async fn delete_recipe(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    caller.require_user()?;
    let id = parse_recipe_id(&id)?;

    state.recipe_service.delete_recipe(&caller, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Recipe deleted"))))
}

/// POST /api/recipes/{id}/visibility
pub async fn toggle_visibility(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Recipe>>, ApiError> {
    caller.require_user()?;
    let id = parse_recipe_id(&id)?;

    let recipe = state.recipe_service.toggle_visibility(&caller, id).await?;
    Ok(Json(ApiResponse::ok(recipe)))
}

/// POST /api/recipes/{id}/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FavoriteState>>, ApiError> {
    caller.require_user()?;
    let id = parse_recipe_id(&id)?;

    let favorite = state.recipe_service.toggle_favorite(&caller, id).await?;
    Ok(Json(ApiResponse::ok(favorite)))
}
