//! Database repository for stored security tokens.
//!
//! The table holds at most one row per (`user_id`, `token_kind`). The upsert
//! is a single atomic statement riding on the unique index, so two concurrent
//! logins for the same user leave exactly one row behind with one of the two
//! values (last write wins).

use crate::database::models::{SecurityToken, TokenKind};
use crate::errors::ServiceResult;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Persistence interface for the SecurityToken entity.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Inserts the token, or replaces the value of the existing row for the
    /// same (`user_id`, `token_kind`) pair.
    async fn upsert_token(&self, token: &SecurityToken) -> ServiceResult<()>;

    /// Returns the current token for a user and kind, if one is stored.
    async fn find_token_by_user_and_kind(
        &self,
        user_id: &str,
        kind: TokenKind,
    ) -> ServiceResult<Option<SecurityToken>>;

    /// Deletes the stored token for a user and kind. Deleting a token that
    /// does not exist is not an error.
    async fn delete_token_by_user_and_kind(
        &self,
        user_id: &str,
        kind: TokenKind,
    ) -> ServiceResult<()>;
}

/// SQLite-backed implementation of [`TokenRepository`].
pub struct SqliteTokenRepository {
    pool: SqlitePool,
}

impl SqliteTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for SqliteTokenRepository {
    async fn upsert_token(&self, token: &SecurityToken) -> ServiceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO security_tokens (id, user_id, token_kind, token_value, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (user_id, token_kind) DO UPDATE SET
                token_value = excluded.token_value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&token.id)
        .bind(&token.user_id)
        .bind(token.token_kind)
        .bind(&token.token_value)
        .bind(token.created_at)
        .bind(token.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_token_by_user_and_kind(
        &self,
        user_id: &str,
        kind: TokenKind,
    ) -> ServiceResult<Option<SecurityToken>> {
        let token = sqlx::query_as::<_, SecurityToken>(
            r#"
            SELECT id, user_id, token_kind, token_value, created_at, updated_at
            FROM security_tokens
            WHERE user_id = ? AND token_kind = ?
            "#,
        )
        .bind(user_id)
        .bind(kind)
        .fetch_optional(&self.pool)
        .await?;

        Ok(token)
    }

    async fn delete_token_by_user_and_kind(
        &self,
        user_id: &str,
        kind: TokenKind,
    ) -> ServiceResult<()> {
        sqlx::query("DELETE FROM security_tokens WHERE user_id = ? AND token_kind = ?")
            .bind(user_id)
            .bind(kind)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::sqlite::SqlitePoolOptions;
    use uuid::Uuid;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    fn sample_token(user_id: &str, kind: TokenKind, value: &str) -> SecurityToken {
        let now = Utc::now();
        SecurityToken {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            token_kind: kind,
            token_value: value.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    async fn count_for_user(pool: &SqlitePool, user_id: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM security_tokens WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_replaces() {
        let pool = test_pool().await;
        let repo = SqliteTokenRepository::new(pool.clone());

        repo.upsert_token(&sample_token("some-user-id", TokenKind::Refresh, "first-value"))
            .await
            .unwrap();
        repo.upsert_token(&sample_token("some-user-id", TokenKind::Refresh, "second-value"))
            .await
            .unwrap();
        repo.upsert_token(&sample_token("some-user-id", TokenKind::Refresh, "third-value"))
            .await
            .unwrap();

        assert_eq!(count_for_user(&pool, "some-user-id").await, 1);

        let stored = repo
            .find_token_by_user_and_kind("some-user-id", TokenKind::Refresh)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.token_value, "third-value");
    }

    #[tokio::test]
    async fn test_kinds_are_stored_independently() {
        let pool = test_pool().await;
        let repo = SqliteTokenRepository::new(pool.clone());

        repo.upsert_token(&sample_token("some-user-id", TokenKind::Refresh, "refresh-value"))
            .await
            .unwrap();
        repo.upsert_token(&sample_token("some-user-id", TokenKind::Access, "access-value"))
            .await
            .unwrap();

        assert_eq!(count_for_user(&pool, "some-user-id").await, 2);

        let refresh = repo
            .find_token_by_user_and_kind("some-user-id", TokenKind::Refresh)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(refresh.token_kind, TokenKind::Refresh);
        assert_eq!(refresh.token_value, "refresh-value");
    }

    #[tokio::test]
    async fn test_find_returns_none_when_absent() {
        let repo = SqliteTokenRepository::new(test_pool().await);

        let found = repo
            .find_token_by_user_and_kind("some-user-id", TokenKind::Refresh)
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let pool = test_pool().await;
        let repo = SqliteTokenRepository::new(pool.clone());

        repo.upsert_token(&sample_token("some-user-id", TokenKind::Refresh, "some-value"))
            .await
            .unwrap();

        repo.delete_token_by_user_and_kind("some-user-id", TokenKind::Refresh)
            .await
            .unwrap();
        assert_eq!(count_for_user(&pool, "some-user-id").await, 0);

        // Deleting again is not an error
        repo.delete_token_by_user_and_kind("some-user-id", TokenKind::Refresh)
            .await
            .unwrap();
    }
}
