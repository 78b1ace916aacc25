//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user known to RecipeBox. Rows are created by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name (optional).
    pub name: Option<String>,
    /// Unique email address.
    pub email: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name to show next to authored content, falling back to the email.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Data required to register a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name (optional).
    pub name: Option<String>,
    /// Email address.
    pub email: String,
}
