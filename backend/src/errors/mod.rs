//! Global application error types and handlers.
//!
//! This module defines the error kinds surfaced by the credential and session
//! core and provides mechanisms for consistent error handling across the
//! backend application.

use thiserror::Error;

/// Generic service error that can be used across all entities
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    DuplicateEntry { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("database error: {source}")]
    Database {
        #[from]
        source: anyhow::Error,
    },

    #[error("{message}")]
    Internal { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn duplicate_entry(message: impl Into<String>) -> Self {
        Self::DuplicateEntry {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Storage errors fold into the service error kinds here; a unique-index
/// violation is the store saying "duplicate entry", everything else is opaque.
impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return ServiceError::duplicate_entry("duplicate entry");
            }
        }
        ServiceError::Database {
            source: anyhow::Error::from(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_surface_verbatim() {
        let err = ServiceError::unauthorized("password doesn't match");
        assert_eq!(err.to_string(), "password doesn't match");

        let err = ServiceError::not_found("user not found");
        assert_eq!(err.to_string(), "user not found");
    }

    #[test]
    fn test_row_not_found_is_not_duplicate() {
        let err = ServiceError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, ServiceError::Database { .. }));
    }
}
