//! User account business logic service.
//!
//! Handles registration and credential verification. Plaintext passwords
//! exist only transiently inside these calls; what reaches the repository is
//! always the bcrypt hash.

use crate::auth::models::RegisterRequest;
use crate::database::models::User;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::password;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Creates a new active user with a freshly assigned id and a hashed
    /// password. A registration against an already-taken email surfaces as
    /// `DuplicateEntry` from the repository's uniqueness constraint.
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<User> {
        let now = Utc::now();
        let password_hash = password::hash_password(&request.password)?;

        let user = User {
            id: Uuid::now_v7().to_string(),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.user_repo.create_user(&user).await?;
        Ok(user)
    }

    /// Fetches the account for an email and checks the password attempt
    /// against the stored hash.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password_attempt: &str,
    ) -> ServiceResult<User> {
        let user = self
            .user_repo
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("user not found"))?;

        password::verify_password(password_attempt, &user.password_hash)?;

        Ok(user)
    }

    /// Retrieves a user by id.
    pub async fn get_user_by_id(&self, id: &str) -> ServiceResult<User> {
        self.user_repo
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("user not found"))
    }
}
