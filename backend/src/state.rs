//! Shared application state threaded through the router.
//!
//! Everything the handlers need — repositories, the token codec, token
//! lifetimes — is constructed once at startup from the loaded config and
//! injected via an `Extension` layer. Request handling never reads the
//! environment.

use crate::config::Config;
use crate::repositories::token_repository::{SqliteTokenRepository, TokenRepository};
use crate::repositories::user_repository::{SqliteUserRepository, UserRepository};
use crate::services::token_service::{TokenLifetimes, TokenService};
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtCodec;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    user_repo: Arc<dyn UserRepository>,
    token_repo: Arc<dyn TokenRepository>,
    pub jwt_codec: Arc<JwtCodec>,
    token_lifetimes: TokenLifetimes,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        AppState {
            user_repo: Arc::new(SqliteUserRepository::new(pool.clone())),
            token_repo: Arc::new(SqliteTokenRepository::new(pool)),
            jwt_codec: Arc::new(JwtCodec::new(&config.jwt_secret)),
            token_lifetimes: TokenLifetimes::from_config(config),
        }
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(self.user_repo.clone())
    }

    pub fn token_service(&self) -> TokenService {
        TokenService::new(
            self.token_repo.clone(),
            self.jwt_codec.clone(),
            self.token_lifetimes,
        )
    }

    pub fn access_token_lifetime_seconds(&self) -> i64 {
        self.token_lifetimes.access.num_seconds()
    }
}
