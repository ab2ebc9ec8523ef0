//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for registration, login,
//! token refresh, and logout. The refresh token travels exclusively in an
//! HTTP-only cookie; only the access token appears in response bodies.

use crate::api::common::{ApiResponse, service_error_to_http, validation_error_response};
use crate::auth::extractor::{self, REFRESH_TOKEN_COOKIE};
use crate::auth::models::*;
use crate::errors::ServiceError;
use crate::state::AppState;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use validator::Validate;

/// Handle user registration
#[axum::debug_handler]
pub async fn register(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, ResponseJson<ApiResponse<UserInfo>>), (StatusCode, String)> {
    if let Err(errors) = payload.validate() {
        return Err(validation_error_response(errors));
    }

    let user = state
        .user_service()
        .register(payload)
        .await
        .map_err(service_error_to_http)?;

    Ok((
        StatusCode::CREATED,
        ResponseJson(ApiResponse::success(
            UserInfo::from(&user),
            "user registered",
        )),
    ))
}

/// Handle user login: verify credentials, then issue the token pair
#[axum::debug_handler]
pub async fn login(
    Extension(state): Extension<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, ResponseJson<ApiResponse<LoginResponse>>), (StatusCode, String)> {
    if let Err(errors) = payload.validate() {
        return Err(validation_error_response(errors));
    }

    let user = state
        .user_service()
        .verify_credentials(&payload.email, &payload.password)
        .await
        .map_err(service_error_to_http)?;

    let token_service = state.token_service();
    let access_token = token_service
        .issue_access_token(&user.id)
        .await
        .map_err(service_error_to_http)?;
    let refresh_token = token_service
        .issue_refresh_token(&user.id)
        .await
        .map_err(service_error_to_http)?;

    let cookie = Cookie::build((REFRESH_TOKEN_COOKIE, refresh_token.token_value))
        .path("/")
        .http_only(true)
        .build();

    let response = LoginResponse {
        access_token: access_token.token_value,
        expires_in: state.access_token_lifetime_seconds(),
        user: UserInfo::from(&user),
    };

    Ok((
        jar.add(cookie),
        ResponseJson(ApiResponse::success(response, "login successful")),
    ))
}

/// Handle access-token refresh from the refresh-token cookie
#[axum::debug_handler]
pub async fn refresh_token(
    Extension(state): Extension<AppState>,
    jar: CookieJar,
) -> Result<ResponseJson<ApiResponse<RefreshTokenResponse>>, (StatusCode, String)> {
    let metadata = extractor::get_and_validate_refresh_token(&state.jwt_codec, &jar)
        .map_err(service_error_to_http)?;

    let token_service = state.token_service();

    // A signature-valid token that is no longer the one on record has been
    // rotated out or revoked; it buys nothing.
    let current = token_service
        .is_refresh_token_current(&metadata)
        .await
        .map_err(service_error_to_http)?;
    if !current {
        return Err(service_error_to_http(ServiceError::unauthorized(
            "invalid token",
        )));
    }

    let access_token = token_service
        .issue_access_token(&metadata.user_id)
        .await
        .map_err(service_error_to_http)?;

    Ok(ResponseJson(ApiResponse::success(
        RefreshTokenResponse {
            access_token: access_token.token_value,
            expires_in: state.access_token_lifetime_seconds(),
        },
        "access token refreshed",
    )))
}

/// Handle logout: revoke the stored refresh token and clear its cookie
#[axum::debug_handler]
pub async fn logout(
    Extension(state): Extension<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, ResponseJson<ApiResponse<()>>), (StatusCode, String)> {
    let metadata = extractor::get_and_validate_refresh_token(&state.jwt_codec, &jar)
        .map_err(service_error_to_http)?;

    state
        .token_service()
        .revoke_refresh_token(&metadata)
        .await
        .map_err(service_error_to_http)?;

    let removal = Cookie::build((REFRESH_TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .build();

    Ok((
        jar.remove(removal),
        ResponseJson(ApiResponse::success((), "logged out")),
    ))
}
