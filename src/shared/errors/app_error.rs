use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// True for provider rate-limit signals (HTTP 429).
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, AppError::RateLimitError(_))
    }

    /// Transient failures worth another attempt (5xx, timeouts, dropped
    /// connections). A provider rejecting the request itself (`ApiError`) is
    /// permanent. Rate limits follow their own cooldown path and never
    /// consume the generic retry budget.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::ExternalServiceError(_) => true,
            AppError::ApiError(_)
            | AppError::RateLimitError(_)
            | AppError::DatabaseError(_)
            | AppError::NotFound(_)
            | AppError::InvalidInput(_)
            | AppError::InternalError(_)
            | AppError::SerializationError(_)
            | AppError::ValidationError(_)
            | AppError::ConfigError(_) => false,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => AppError::RateLimitError("Too many requests".to_string()),
                404 => AppError::NotFound("External resource not found".to_string()),
                500..=599 => AppError::ExternalServiceError(format!("HTTP {}: {}", status, err)),
                _ => AppError::ApiError(format!("HTTP {}: {}", status, err)),
            }
        } else if err.is_decode() {
            AppError::SerializationError(err.to_string())
        } else {
            AppError::ExternalServiceError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::InvalidInput(format!("Invalid date/time: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
