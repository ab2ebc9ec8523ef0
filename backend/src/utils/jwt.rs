//! Bearer-token codec for authentication.
//!
//! Creates and parses the signed tokens that carry a user's session claims.
//! The signing secret is injected at construction time so the codec can be
//! built with fixed keys in tests and never touches process-global state.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::database::models::TokenKind;
use crate::errors::{ServiceError, ServiceResult};

/// Decoded token payload. The signature covers every field; any mutation of
/// the encoded token invalidates it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

/// Claims plus the raw presented token, as pulled off an inbound request.
/// The raw value is kept so the orchestrator can compare it against the
/// stored record.
#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub user_id: String,
    pub kind: TokenKind,
    pub token: String,
}

/// Token codec holding the signing material and validation rules.
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    /// Create a codec from a server-held symmetric secret.
    pub fn new(secret: &str) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        // Pinned to the HMAC family; tokens signed with any other algorithm
        // are rejected outright.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        JwtCodec {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Sign a new token for the given subject and kind.
    pub fn issue(
        &self,
        user_id: &str,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> ServiceResult<String> {
        let claims = Claims {
            user_id: user_id.to_owned(),
            kind,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal(format!("token signing failed: {}", e)))
    }

    /// Verify a token's signature, algorithm, expiry, and claim shape.
    ///
    /// Every failure collapses to the same generic error so callers cannot
    /// probe which check rejected the token.
    pub fn parse(&self, token: &str) -> ServiceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| ServiceError::unauthorized("invalid token"))
    }
}
