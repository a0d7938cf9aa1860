use reqwest::StatusCode;

use crate::modules::cart::models::QuantityError;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Quantity selection rejected against available stock
    #[error(transparent)]
    Quantity(#[from] QuantityError),

    /// Local key-value storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem errors from the local store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-success response from the storefront API
    #[error("API error {status}: {message}")]
    Api { status: StatusCode, message: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// HTTP middleware errors
    #[error("HTTP middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Build an error from a non-success API response
    ///
    /// 404 and 401 map onto their dedicated variants so callers can match on them.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
            _ => AppError::Api { status, message },
        }
    }

    /// Whether offering the user a retry makes sense
    ///
    /// Network failures and 5xx responses are retryable; validation and 4xx are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Api { status, .. } => status.is_server_error(),
            AppError::HttpClient(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            AppError::Middleware(_) => true,
            _ => false,
        }
    }
}
