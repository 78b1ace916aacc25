//! Profile lookups for the authenticated caller.

use std::sync::Arc;

use recipebox_core::error::AppError;
use recipebox_database::RecipeStore;
use recipebox_entity::user::User;

use crate::context::RequestContext;

/// Reads the caller's account row.
#[derive(Debug, Clone)]
pub struct UserService {
    store: Arc<dyn RecipeStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// The caller's id, name, and email.
    ///
    /// A valid token whose user row is gone is reported as `NotFound`.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        let user_id = ctx.require_user()?;
        self.store
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
