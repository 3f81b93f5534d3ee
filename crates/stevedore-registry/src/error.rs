//! Error types for listing operations.
//!
//! A listing failure is fatal for the traversal that issued it: the paginator
//! propagates it to the orchestrator, which aborts the run. Only the upsert
//! layer tolerates per-record failures.

use thiserror::Error;

/// Errors that can occur while listing registry resources.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Failed to reach the listing API.
    #[error("failed to connect to registry at {url}: {source}")]
    ConnectionFailed {
        /// Endpoint URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// Authentication material could not be turned into a request header.
    #[error("authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message.
        message: String,
    },

    /// The listing API returned a non-success status.
    #[error("HTTP error from registry: {status} - {message}")]
    HttpError {
        /// HTTP status code.
        status: u16,
        /// Response body or error message.
        message: String,
    },

    /// A listing response body could not be decoded.
    #[error("failed to decode listing response: {message}")]
    DecodeFailed {
        /// Error message.
        message: String,
    },
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::ConnectionFailed {
                url: err
                    .url()
                    .map_or_else(|| "unknown".to_string(), ToString::to_string),
                source: err,
            }
        } else if err.is_decode() {
            Self::DecodeFailed {
                message: err.to_string(),
            }
        } else {
            Self::HttpError {
                status: err.status().map_or(0, |s| s.as_u16()),
                message: err.to_string(),
            }
        }
    }
}
