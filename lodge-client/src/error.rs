//! Client error types

use thiserror::Error;

/// Status code reported when no HTTP status is determinable
/// (transport failures, decode failures).
pub const STATUS_UNDETERMINED: u16 = 500;

/// Normalized API error
///
/// Every failure in the client layer collapses into this one shape: a
/// human-readable message plus the numeric HTTP status code. Callers
/// branch on `status` when they need to distinguish failure classes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code (500 when none is determinable)
    pub status: u16,
}

impl ApiError {
    /// Create an error with an explicit status code
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Create an error from a failure that carries no status code
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, STATUS_UNDETERMINED)
    }

    /// Fallback error for failures that carry no message either
    pub fn unknown() -> Self {
        Self::internal("Unknown error occurred")
    }

    /// Whether this error represents a missing resource
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl Default for ApiError {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            Self::unknown()
        } else {
            Self::internal(message)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err.to_string())
    }
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;
