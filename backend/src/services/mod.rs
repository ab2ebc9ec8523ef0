//! Module for core business logic services.
//!
//! This module encapsulates the orchestrators that sit between the HTTP
//! handlers and the persistence layer: user account management and the
//! security-token lifecycle.

pub mod token_service;
pub mod user_service;

#[cfg(test)]
mod tests {
    //! End-to-end walk through the credential and session lifecycle against
    //! real SQLite-backed repositories.

    use crate::auth::models::RegisterRequest;
    use crate::database::models::TokenKind;
    use crate::errors::ServiceError;
    use crate::repositories::token_repository::SqliteTokenRepository;
    use crate::repositories::user_repository::SqliteUserRepository;
    use crate::services::token_service::{TokenLifetimes, TokenService};
    use crate::services::user_service::UserService;
    use crate::utils::jwt::{JwtCodec, TokenMetadata};
    use chrono::Duration;
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::sync::Arc;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    fn services(pool: SqlitePool) -> (UserService, TokenService, Arc<JwtCodec>) {
        let codec = Arc::new(JwtCodec::new("test-signing-secret"));
        let user_service = UserService::new(Arc::new(SqliteUserRepository::new(pool.clone())));
        let token_service = TokenService::new(
            Arc::new(SqliteTokenRepository::new(pool)),
            codec.clone(),
            TokenLifetimes {
                access: Duration::minutes(15),
                refresh: Duration::hours(48),
            },
        );
        (user_service, token_service, codec)
    }

    fn metadata_for(codec: &JwtCodec, token_value: &str) -> TokenMetadata {
        let claims = codec.parse(token_value).unwrap();
        TokenMetadata {
            user_id: claims.user_id,
            kind: claims.kind,
            token: token_value.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_login_refresh_logout_lifecycle() {
        let (user_service, token_service, codec) = services(test_pool().await);

        // Registration stores a hashed credential on an active account
        let registered = user_service
            .register(RegisterRequest {
                first_name: "Alice".to_string(),
                last_name: "Doe".to_string(),
                email: "alice@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap();
        assert!(registered.is_active);
        assert_ne!(registered.password_hash, "secret123");

        // Wrong password never reaches token issuance
        let err = user_service
            .verify_credentials("alice@example.com", "wrong-password")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized { .. }));

        // Login: verify credentials, then issue the pair
        let user = user_service
            .verify_credentials("alice@example.com", "secret123")
            .await
            .unwrap();
        let access = token_service.issue_access_token(&user.id).await.unwrap();
        let refresh = token_service.issue_refresh_token(&user.id).await.unwrap();
        assert_eq!(codec.parse(&access.token_value).unwrap().kind, TokenKind::Access);

        // Refresh: the presented token is still the one on record, and the
        // refresh token stays valid after a new access token is minted
        let refresh_metadata = metadata_for(&codec, &refresh.token_value);
        assert!(
            token_service
                .is_refresh_token_current(&refresh_metadata)
                .await
                .unwrap()
        );
        token_service.issue_access_token(&user.id).await.unwrap();
        assert!(
            token_service
                .is_refresh_token_current(&refresh_metadata)
                .await
                .unwrap()
        );

        // Logout deletes the stored record; the old refresh token is now stale
        token_service
            .revoke_refresh_token(&refresh_metadata)
            .await
            .unwrap();
        assert!(
            !token_service
                .is_refresh_token_current(&refresh_metadata)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_second_login_rotates_out_previous_refresh_token() {
        let (user_service, token_service, codec) = services(test_pool().await);

        user_service
            .register(RegisterRequest {
                first_name: "Alice".to_string(),
                last_name: "Doe".to_string(),
                email: "alice@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap();
        let user = user_service
            .verify_credentials("alice@example.com", "secret123")
            .await
            .unwrap();

        let first = token_service.issue_refresh_token(&user.id).await.unwrap();
        // chrono timestamps have second resolution; force distinct claims so
        // the rotated token differs from the first
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
        let second = token_service.issue_refresh_token(&user.id).await.unwrap();
        assert_ne!(first.token_value, second.token_value);

        let stale = metadata_for(&codec, &first.token_value);
        let current = metadata_for(&codec, &second.token_value);
        assert!(!token_service.is_refresh_token_current(&stale).await.unwrap());
        assert!(
            token_service
                .is_refresh_token_current(&current)
                .await
                .unwrap()
        );
    }
}
