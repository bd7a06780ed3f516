//! Error types and result aliases for catalog operations.
//!
//! Provides a unified error type that covers all failure modes of the
//! registry query layer with actionable error messages.

use std::time::Duration;
use thiserror::Error;

/// Unified error type for all Spyglass operations
#[derive(Error, Debug)]
pub enum ExplorerError {
    // Caller errors
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    // Remote registry failures
    #[error("Package '{name}' not found in registry")]
    PackageNotFound { name: String },

    #[error("Registry rate limit exceeded")]
    RateLimited {
        /// Wait hinted by the server's Retry-After header, when it sent one
        retry_after: Option<Duration>,
    },

    #[error("Request timed out: {message}")]
    Timeout { message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Registry returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
}

/// Result type alias for Spyglass operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;

impl ExplorerError {
    /// Create an invalid-input error from any message type
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Wrap any error source as a network failure
    pub fn network<E>(message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Check whether the retry policy may re-attempt after this error.
    ///
    /// Caller mistakes and definitive registry answers (404, most 4xx)
    /// are final; rate limits, timeouts, transport failures, and server
    /// errors are transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            ExplorerError::InvalidInput { .. } => false,
            ExplorerError::PackageNotFound { .. } => false,
            ExplorerError::RateLimited { .. } => true,
            ExplorerError::Timeout { .. } => true,
            ExplorerError::Network { .. } => true,
            ExplorerError::Http { status, .. } => *status >= 500,
        }
    }

    /// Actionable hint rendered under the error message
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ExplorerError::InvalidInput { .. } => {
                Some("Provide a non-empty package name or search term")
            }
            ExplorerError::PackageNotFound { .. } => {
                Some("Check the package name spelling or try searching the registry")
            }
            ExplorerError::RateLimited { .. } => {
                Some("The registry is throttling requests; wait a moment and try again")
            }
            ExplorerError::Timeout { .. } | ExplorerError::Network { .. } => {
                Some("Check your internet connection and try again")
            }
            ExplorerError::Http { .. } => None,
        }
    }
}
