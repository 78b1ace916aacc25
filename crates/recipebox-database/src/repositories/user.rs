//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use recipebox_core::result::AppResult;
use recipebox_entity::user::{CreateUser, User};

use crate::connection::db_error;

/// Repository for user lookups and the identity-provider upsert.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by id"))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by email"))
    }

    /// Insert a user or refresh the name of the existing row with that email.
    pub async fn upsert(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (email, name) VALUES ($1, $2)
               ON CONFLICT (email) DO UPDATE SET name = COALESCE(EXCLUDED.name, users.name)
               RETURNING *"#,
        )
        .bind(&data.email)
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to upsert user"))
    }
}
