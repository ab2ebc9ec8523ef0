//! Middleware for protecting authenticated routes.
//!
//! Validates the bearer token on inbound requests and makes the decoded
//! metadata available to downstream handlers via request extensions.

use crate::api::common::service_error_to_http;
use crate::auth::extractor::get_and_validate_access_token;
use crate::state::AppState;
use axum::{
    extract::{Extension, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

/// JWT authentication middleware
pub async fn jwt_auth(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    match get_and_validate_access_token(&state.jwt_codec, request.headers()) {
        Ok(metadata) => {
            // Make the caller's identity available to handlers
            request.extensions_mut().insert(metadata);
            Ok(next.run(request).await)
        }
        Err(error) => Err(service_error_to_http(error)),
    }
}
