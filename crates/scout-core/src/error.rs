//! Error types for `MovieScout`.

use thiserror::Error;

/// Result type alias using `MovieScout`'s Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for `MovieScout`.
#[derive(Error, Debug)]
pub enum Error {
    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] HttpError),

    #[error("Network error: {0}")]
    Network(String),

    // Catalog API errors
    #[error("Catalog API error: {0}")]
    Catalog(String),

    #[error("Failed to parse API response: {0}")]
    Parse(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    // Account service errors
    #[error("Account service error: {0}")]
    Account(String),

    /// Deliberately generic: wrong password and unknown account look the same.
    #[error("Could not find an account with such credentials")]
    CredentialsNotFound,

    // Local storage errors
    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// HTTP-specific errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed with status {status}: {message}")]
    StatusError { status: u16, message: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Returns true if this error is retryable.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_)
                | Self::RateLimited { .. }
                | Self::Http(
                    HttpError::ConnectionFailed(_)
                        | HttpError::Timeout
                        | HttpError::StatusError {
                            status: 500..=599,
                            ..
                        }
                )
        )
    }

    /// Returns true if this is a rate limit error.
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Returns the HTTP status code, if the error carries one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(HttpError::StatusError { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        assert!(Error::Network("test".into()).is_retryable());
        assert!(Error::RateLimited {
            retry_after_secs: Some(10)
        }
        .is_retryable());
        assert!(Error::Http(HttpError::StatusError {
            status: 503,
            message: String::new()
        })
        .is_retryable());
        assert!(!Error::Http(HttpError::StatusError {
            status: 401,
            message: String::new()
        })
        .is_retryable());
        assert!(!Error::CredentialsNotFound.is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = Error::Catalog("test error".into());
        assert_eq!(err.to_string(), "Catalog API error: test error");
        assert_eq!(
            Error::CredentialsNotFound.to_string(),
            "Could not find an account with such credentials"
        );
    }

    #[test]
    fn test_error_status() {
        let err = Error::Http(HttpError::StatusError {
            status: 404,
            message: "missing".into(),
        });
        assert_eq!(err.status(), Some(404));
        assert_eq!(Error::Network("x".into()).status(), None);
    }
}
