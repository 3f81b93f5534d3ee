//! Error types for configuration checks.

use thiserror::Error;

/// Errors raised while validating the configured region list.
#[derive(Debug, Error)]
pub enum RegionError {
    /// Configured region is not in the provider allow-set.
    #[error("unknown region '{region}': not a valid artifact-registry location")]
    UnknownRegion {
        /// The rejected region identifier.
        region: String,
    },
}
