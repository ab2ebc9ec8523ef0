//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these may differ from API-specific models;
//! in particular `password_hash` and `token_value` never leave this layer
//! unredacted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A registered account holder. `password_hash` is always a bcrypt hash,
/// never the plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Discriminator between the two token flavors sharing one signing scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "ACCESS",
            TokenKind::Refresh => "REFRESH",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored bearer token. At most one row exists per (`user_id`,
/// `token_kind`); rotation replaces the row in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SecurityToken {
    pub id: String,
    pub user_id: String,
    pub token_kind: TokenKind,
    pub token_value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
