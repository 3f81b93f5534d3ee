//! Error types for catalog operations.
//!
//! Only pre-scan failures surface here: reaching the token endpoint, minting
//! the access token, and turning it into a request header. A rejected upsert
//! is an [`UpsertOutcome::Skipped`](crate::UpsertOutcome::Skipped) outcome,
//! never an error.

use thiserror::Error;

/// Errors that can occur while talking to the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to reach the catalog API.
    #[error("failed to connect to catalog at {url}: {source}")]
    ConnectionFailed {
        /// Catalog URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The catalog refused to mint an access token.
    #[error("catalog authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message.
        message: String,
    },
}
