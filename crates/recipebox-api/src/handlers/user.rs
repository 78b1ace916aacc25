//! Caller profile handler.

use axum::Json;
use axum::extract::State;

use recipebox_entity::user::User;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::Caller;
use crate::state::AppState;

/// GET /api/me
pub async fn me(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.profile(&caller).await?;
    Ok(Json(ApiResponse::ok(user)))
}
