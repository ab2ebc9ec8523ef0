//! Security-token lifecycle orchestration.
//!
//! Issues access/refresh token pairs, checks presented refresh tokens
//! against the stored record, and revokes them on logout. Per (user, kind)
//! the stored state only ever moves absent -> stored -> absent, with
//! rotation replacing the stored row in place.

use crate::config::Config;
use crate::database::models::{SecurityToken, TokenKind};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::token_repository::TokenRepository;
use crate::utils::jwt::{JwtCodec, TokenMetadata};
use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// How long each token kind stays valid.
#[derive(Debug, Clone, Copy)]
pub struct TokenLifetimes {
    pub access: Duration,
    pub refresh: Duration,
}

impl TokenLifetimes {
    pub fn from_config(config: &Config) -> Self {
        TokenLifetimes {
            access: Duration::seconds(config.access_token_expiry_seconds),
            refresh: Duration::seconds(config.refresh_token_expiry_seconds),
        }
    }
}

/// Orchestrator for issuing, validating, and revoking security tokens.
pub struct TokenService {
    token_repo: Arc<dyn TokenRepository>,
    codec: Arc<JwtCodec>,
    lifetimes: TokenLifetimes,
}

impl TokenService {
    pub fn new(
        token_repo: Arc<dyn TokenRepository>,
        codec: Arc<JwtCodec>,
        lifetimes: TokenLifetimes,
    ) -> Self {
        TokenService {
            token_repo,
            codec,
            lifetimes,
        }
    }

    /// Generates a refresh token and stores it, replacing any previous
    /// refresh token for the user.
    pub async fn issue_refresh_token(&self, user_id: &str) -> ServiceResult<SecurityToken> {
        let now = Utc::now();
        let token_value = self
            .codec
            .issue(user_id, TokenKind::Refresh, now, now + self.lifetimes.refresh)
            .map_err(|_| ServiceError::internal("could not generate refresh token"))?;

        let refresh_token = SecurityToken {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.to_owned(),
            token_kind: TokenKind::Refresh,
            token_value,
            created_at: now,
            updated_at: now,
        };

        self.token_repo
            .upsert_token(&refresh_token)
            .await
            .map_err(|_| ServiceError::internal("could not store refresh token"))?;

        Ok(refresh_token)
    }

    /// Generates an access token. Access tokens are validated by signature
    /// alone and are not persisted, so they cannot be revoked individually;
    /// their short lifetime bounds the exposure.
    pub async fn issue_access_token(&self, user_id: &str) -> ServiceResult<SecurityToken> {
        let now = Utc::now();
        let token_value = self
            .codec
            .issue(user_id, TokenKind::Access, now, now + self.lifetimes.access)
            .map_err(|_| ServiceError::internal("could not generate access token"))?;

        Ok(SecurityToken {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.to_owned(),
            token_kind: TokenKind::Access,
            token_value,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns true only if the presented refresh token is the one currently
    /// on record for its user. A token rotated out by a later login, or
    /// deleted by logout, is stale even while its signature is still valid.
    pub async fn is_refresh_token_current(
        &self,
        metadata: &TokenMetadata,
    ) -> ServiceResult<bool> {
        let stored = self
            .token_repo
            .find_token_by_user_and_kind(&metadata.user_id, TokenKind::Refresh)
            .await?;

        Ok(stored.is_some_and(|record| record.token_value == metadata.token))
    }

    /// Deletes the stored refresh token for the presenting user. Idempotent.
    pub async fn revoke_refresh_token(&self, metadata: &TokenMetadata) -> ServiceResult<()> {
        self.token_repo
            .delete_token_by_user_and_kind(&metadata.user_id, TokenKind::Refresh)
            .await
    }
}
