//! Request-bound token extraction.
//!
//! Pulls bearer tokens out of an inbound request and validates them with the
//! codec before anything touches the store. Access tokens arrive in the
//! `Authorization` header, refresh tokens in a dedicated HTTP-only cookie.

use crate::errors::{ServiceError, ServiceResult};
use crate::utils::jwt::{JwtCodec, TokenMetadata};
use axum::http::{HeaderMap, header::AUTHORIZATION};
use axum_extra::extract::cookie::CookieJar;

/// Name of the cookie carrying the refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "REFRESH_TOKEN";

/// Reads and validates the access token from the `Authorization` header.
///
/// The header value must be exactly two space-separated parts (scheme and
/// token); anything else counts as "not found" rather than malformed, so the
/// response does not reveal how close the attempt was.
pub fn get_and_validate_access_token(
    codec: &JwtCodec,
    headers: &HeaderMap,
) -> ServiceResult<TokenMetadata> {
    let header_value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ServiceError::unauthorized("access token not found"))?;

    let parts: Vec<&str> = header_value.split(' ').collect();
    if parts.len() != 2 {
        return Err(ServiceError::unauthorized("access token not found"));
    }

    let token = parts[1];
    let claims = codec.parse(token)?;

    Ok(TokenMetadata {
        user_id: claims.user_id,
        kind: claims.kind,
        token: token.to_owned(),
    })
}

/// Reads and validates the refresh token from its cookie.
pub fn get_and_validate_refresh_token(
    codec: &JwtCodec,
    jar: &CookieJar,
) -> ServiceResult<TokenMetadata> {
    let cookie = jar
        .get(REFRESH_TOKEN_COOKIE)
        .ok_or_else(|| ServiceError::unauthorized("refresh token not found"))?;

    let token = cookie.value();
    let claims = codec.parse(token)?;

    Ok(TokenMetadata {
        user_id: claims.user_id,
        kind: claims.kind,
        token: token.to_owned(),
    })
}
