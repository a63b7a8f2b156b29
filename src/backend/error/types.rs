/**
 * Backend Error Types
 *
 * This module defines the error taxonomy for the backend server. These
 * errors are returned from database operations, the trip mutation service,
 * and HTTP handlers, and convert directly into HTTP responses.
 *
 * # Error Categories
 *
 * - `NotAuthorized` - the caller is not the trip's creator or a collaborator
 * - `NotFound` - a referenced row does not exist
 * - `Database` - the persistence layer failed; propagated unchanged
 * - `Auth` - missing/invalid credentials or session token
 * - `Validation` - a request field failed validation
 * - `Conflict` - a uniqueness constraint was violated (signup)
 *
 * Disconnection of a streaming client is NOT an error and never surfaces
 * through this type; subscription streams end cleanly instead.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend error taxonomy
///
/// Each variant maps to one externally visible HTTP status via
/// [`AppError::status_code`]. Authorization and not-found failures are
/// detected locally per operation and returned synchronously; they are
/// never retried.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller may not act on the addressed resource (for trips: not the
    /// creator and not a listed collaborator)
    #[error("Not authorized to access this resource")]
    NotAuthorized,

    /// Referenced entity does not exist
    #[error("{what} not found")]
    NotFound {
        /// What was being looked up (e.g., "Trip item")
        what: String,
    },

    /// The persistence layer failed
    ///
    /// Propagated unchanged to the caller; a storage failure during a
    /// mutation suppresses event publication.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Authentication failure (missing/invalid token, bad credentials)
    #[error("Authentication failed: {message}")]
    Auth {
        /// Human-readable error message
        message: String,
    },

    /// Request validation failure
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Uniqueness conflict (e.g., username or email already taken)
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Create a not-found error naming the missing entity
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create an authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotAuthorized` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Database` - 500 Internal Server Error
    /// - `Auth` - 401 Unauthorized
    /// - `Validation` - 400 Bad Request
    /// - `Conflict` - 409 Conflict
    /// - `Serialization` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotAuthorized => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth { .. } => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the externally visible error message
    ///
    /// Database and serialization details are not leaked to clients.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) => "Internal server error".to_string(),
            Self::Serialization(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<SharedError> for AppError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { field, message } => Self::Validation { field, message },
            SharedError::SerializationError { message } => Self::Validation {
                field: "body".to_string(),
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_authorized_is_forbidden() {
        assert_eq!(AppError::NotAuthorized.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found() {
        let error = AppError::not_found("Trip item");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "Trip item not found");
    }

    #[test]
    fn test_auth_error_is_unauthorized() {
        let error = AppError::auth("Invalid token");
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_validation_error() {
        let error = AppError::validation("quantity", "must be a positive integer");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.to_string().contains("quantity"));
    }

    #[test]
    fn test_conflict() {
        let error = AppError::conflict("Username already taken");
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_message_is_opaque() {
        let error = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_from_shared_validation_error() {
        let shared = SharedError::validation("name", "cannot be empty");
        let app: AppError = shared.into();
        match app {
            AppError::Validation { field, .. } => assert_eq!(field, "name"),
            _ => panic!("Expected Validation"),
        }
    }
}
