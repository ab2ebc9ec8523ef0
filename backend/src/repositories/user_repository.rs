//! Database repository for user account persistence.
//!
//! Provides create and lookup operations for registered users. Email
//! uniqueness is enforced by the storage schema, not by a pre-check, so a
//! duplicate registration is detected even under concurrent requests.

use crate::database::models::User;
use crate::errors::{ServiceError, ServiceResult};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Persistence interface for the User entity.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user. Fails with `DuplicateEntry` if the email is
    /// already registered.
    async fn create_user(&self, user: &User) -> ServiceResult<()>;

    /// Looks a user up by email. Emails are matched exactly as stored.
    async fn get_user_by_email(&self, email: &str) -> ServiceResult<Option<User>>;

    /// Looks a user up by their unique identifier.
    async fn get_user_by_id(&self, id: &str) -> ServiceResult<Option<User>>;
}

/// SQLite-backed implementation of [`UserRepository`].
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_user(&self, user: &User) -> ServiceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, email, password_hash, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match ServiceError::from(e) {
            ServiceError::DuplicateEntry { .. } => {
                ServiceError::duplicate_entry("email address already exists")
            }
            other => other,
        })?;

        Ok(())
    }

    async fn get_user_by_email(&self, email: &str) -> ServiceResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, password_hash, is_active, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user_by_id(&self, id: &str) -> ServiceResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, password_hash, is_active, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
