//! Handler functions for user profile endpoints.
//!
//! Serves user lookups for authenticated callers. Responses carry the public
//! presentation of an account, never the stored password hash.

use crate::api::common::{ApiResponse, service_error_to_http};
use crate::auth::models::UserInfo;
use crate::state::AppState;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};

/// Fetch a single user by id
#[axum::debug_handler]
pub async fn get_user_by_id(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<UserInfo>>, (StatusCode, String)> {
    let user = state
        .user_service()
        .get_user_by_id(&id)
        .await
        .map_err(service_error_to_http)?;

    Ok(ResponseJson(ApiResponse::success(
        UserInfo::from(&user),
        "user retrieved",
    )))
}
