//! Error types for Lectern.

use thiserror::Error;

/// Primary error type for all Lectern operations.
#[derive(Error, Debug)]
pub enum LecternError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported source file: {0}")]
    UnsupportedSource(String),

    #[error("Audio decode error: {0}")]
    Decode(String),

    #[error("Playback error: {0}")]
    Playback(String),
}

impl LecternError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this error is potentially retryable at the transport level.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) | Self::RateLimited { .. } => true,
            Self::Api { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, LecternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable() {
        assert!(LecternError::api(503, "overloaded").is_retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        assert!(!LecternError::api(400, "bad request").is_retryable());
        assert!(!LecternError::Authentication("bad key".into()).is_retryable());
    }

    #[test]
    fn decode_error_is_not_retryable() {
        assert!(!LecternError::Decode("odd byte length".into()).is_retryable());
    }

    #[test]
    fn api_display_includes_status() {
        let msg = LecternError::api(429, "slow down").to_string();
        assert!(msg.contains("429"), "expected status in message: {msg}");
    }
}
