//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle registration, login, token refreshing, and logout.
//! They are designed to be nested under the user router in the main app.

use crate::auth::handlers::*;
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{delete, patch, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh-token", patch(refresh_token))
        .route("/logout", delete(logout).layer(middleware::from_fn(jwt_auth)))
}
