//! Defines the HTTP routes for user profile access.
//!
//! These routes provide endpoints for reading user data beyond the
//! authentication flow itself; all of them require a valid access token.

use super::handlers::get_user_by_id;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn user_router() -> Router {
    Router::new().route(
        "/{id}",
        get(get_user_by_id).layer(middleware::from_fn(jwt_auth)),
    )
}
