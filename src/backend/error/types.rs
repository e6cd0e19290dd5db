/**
 * Backend Error Types
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Raised while processing HTTP requests: bad input, missing parameters,
 * conflicts, missing resources.
 *
 * ## Authentication Failures
 *
 * Raised when a session token is absent, malformed, expired, or names a
 * user that no longer exists. At WebSocket admission these reject the
 * upgrade before any session state is created.
 *
 * ## Storage Errors
 *
 * Wrapped `sqlx` errors from the friend, history and user stores.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Why a session token was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// No token was presented
    #[error("Session token is required")]
    MissingToken,

    /// The token failed signature or expiry validation
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token is valid but its user no longer exists
    #[error("User not found")]
    UnknownUser,

    /// The user store could not be queried
    #[error("Identity lookup failed: {0}")]
    Lookup(String),
}

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use callrelay::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::CONFLICT, "Friend already added");
/// assert_eq!(err.status_code(), StatusCode::CONFLICT);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., missing parameter, conflict)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// State management error
    #[error("State error: {message}")]
    StateError {
        /// Human-readable error message
        message: String,
    },

    /// Relay protocol error (a frame the relay cannot accept)
    #[error("Protocol error: {message}")]
    ProtocolError {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failure
    #[error(transparent)]
    Unauthorized(#[from] AuthFailure),

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Create a new protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Unauthorized` - 401, except a failed lookup which is 500
    /// - `ProtocolError` / validation errors - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ProtocolError { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized(AuthFailure::Lookup(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::FrameError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    ///
    /// Database errors are reported generically; the detail goes to the log.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StateError { message } => message.clone(),
            Self::ProtocolError { message } => message.clone(),
            Self::Unauthorized(err) => err.to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::SerializationError(err) => err.to_string(),
            Self::DatabaseError(_) => "Database error".to_string(),
        }
    }
}
