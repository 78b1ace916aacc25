//! Like endpoint.
//!
//! Unlike the other endpoints the body is the bare `{liked, likesCount}`
//! state, without the `{success, data}` envelope.

use axum::Json;
use axum::extract::{Path, State};

use recipebox_entity::engagement::LikeState;

use crate::error::ApiError;
use crate::extractors::{Caller, parse_recipe_id};
use crate::state::AppState;

/// POST /api/recipes/{id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<LikeState>, ApiError> {
    caller.require_user()?;
    let id = parse_recipe_id(&id)?;

    let like = state.recipe_service.toggle_like(&caller, id).await?;
    Ok(Json(like))
}
