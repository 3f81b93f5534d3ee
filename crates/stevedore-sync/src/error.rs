//! Error types for the sync orchestrator.

use stevedore_catalog::CatalogError;
use stevedore_core::RegionError;
use stevedore_registry::RegistryError;
use thiserror::Error;

/// Result type alias for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that abort a sync run.
///
/// Upsert rejections never appear here — they are per-entity
/// [`UpsertOutcome::Skipped`](stevedore_catalog::UpsertOutcome::Skipped)
/// outcomes counted in the run report.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Invalid configuration, caught before any network activity.
    #[error("invalid sync configuration: {0}")]
    Config(#[from] RegionError),

    /// A listing call failed; the traversal cannot proceed.
    #[error("listing failed: {0}")]
    Listing(#[from] RegistryError),

    /// The catalog session could not be established.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: SyncError = RegionError::UnknownRegion {
            region: "mars-north1".to_string(),
        }
        .into();
        assert!(matches!(err, SyncError::Config(_)));
        assert!(err.to_string().contains("mars-north1"));
    }

    #[test]
    fn test_listing_error_conversion() {
        let err: SyncError = RegistryError::HttpError {
            status: 429,
            message: "quota exceeded".to_string(),
        }
        .into();
        assert!(matches!(err, SyncError::Listing(_)));
    }
}
