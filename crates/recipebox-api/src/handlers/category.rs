//! Category catalog handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use recipebox_entity::category::{Category, CategoryOption, CategoryWithCount};

use crate::dto::request::{CreateCategoryRequest, validate_body};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{Caller, json_body};
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ApiResponse<Vec<CategoryWithCount>>>, ApiError> {
    let categories = state.category_service.list_categories(&caller).await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// GET /api/categories/available
pub async fn available_categories(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ApiResponse<Vec<CategoryOption>>>, ApiError> {
    let options = state.category_service.available_categories(&caller).await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), ApiError> {
    caller.require_user()?;
    let req = json_body(body)?;
    validate_body(&req)?;

    let category = state
        .category_service
        .create_category(&caller, &req.name)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}
