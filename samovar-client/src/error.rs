//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network transport failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Client-side validation failed before submission
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-2xx response with a detail message
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
