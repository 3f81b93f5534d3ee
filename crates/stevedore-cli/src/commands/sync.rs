//! Sync command implementation.
//!
//! Wires the listing client, the catalog client, and the orchestrator
//! together from flags and environment variables, then runs one full scan.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use url::Url;

use stevedore_catalog::{CatalogClient, CatalogConfig};
use stevedore_registry::{RegistryAuth, RegistryClient, RegistryConfig};
use stevedore_sync::config::{DEFAULT_IMAGE_BLUEPRINT, DEFAULT_REPOSITORY_BLUEPRINT};
use stevedore_sync::{SyncConfig, Syncer};

/// Arguments for the sync command.
#[derive(Args)]
pub struct SyncArgs {
    /// Cloud project whose artifact registries are scanned
    #[arg(short, long, env = "STEVEDORE_PROJECT")]
    pub project: String,

    /// Comma-separated artifact-registry locations to scan, in order
    #[arg(short, long, env = "STEVEDORE_REGIONS", value_delimiter = ',')]
    pub regions: Vec<String>,

    /// Base URL of the artifact-registry listing API
    #[arg(
        long,
        env = "STEVEDORE_REGISTRY_ENDPOINT",
        default_value = stevedore_registry::DEFAULT_ENDPOINT
    )]
    pub registry_endpoint: String,

    /// Pre-acquired bearer token for the listing API
    #[arg(long, env = "STEVEDORE_REGISTRY_TOKEN", hide_env_values = true)]
    pub registry_token: Option<String>,

    /// Base URL of the catalog API
    #[arg(
        long,
        env = "STEVEDORE_CATALOG_URL",
        default_value = stevedore_catalog::DEFAULT_BASE_URL
    )]
    pub catalog_url: String,

    /// Catalog client identifier
    #[arg(long, env = "STEVEDORE_CATALOG_CLIENT_ID")]
    pub catalog_client_id: String,

    /// Catalog client secret
    #[arg(long, env = "STEVEDORE_CATALOG_CLIENT_SECRET", hide_env_values = true)]
    pub catalog_client_secret: String,

    /// Blueprint kind for repository entities
    #[arg(long, default_value = DEFAULT_REPOSITORY_BLUEPRINT)]
    pub repository_blueprint: String,

    /// Blueprint kind for image entities
    #[arg(long, default_value = DEFAULT_IMAGE_BLUEPRINT)]
    pub image_blueprint: String,

    /// Page-size hint for listing calls
    #[arg(long, default_value = "1")]
    pub page_size: i32,

    /// Request timeout in seconds for both APIs
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

/// Runs the sync command.
///
/// # Errors
///
/// Returns an error if:
/// - A configured URL is invalid
/// - Catalog authentication fails
/// - A region fails validation or a listing call fails mid-scan
pub async fn run(args: SyncArgs) -> Result<()> {
    Url::parse(&args.registry_endpoint).context("Invalid registry endpoint")?;
    Url::parse(&args.catalog_url).context("Invalid catalog URL")?;

    info!(
        project = %args.project,
        regions = ?args.regions,
        catalog = %args.catalog_url,
        "starting catalog sync"
    );

    let timeout = Duration::from_secs(args.timeout);

    let registry_config = RegistryConfig::new(&args.registry_endpoint)
        .with_auth(registry_auth(args.registry_token.as_deref()))
        .with_page_size(args.page_size)
        .with_timeout(timeout);
    let source = Arc::new(
        RegistryClient::new(registry_config).context("Failed to create registry client")?,
    );

    let catalog_config = CatalogConfig::new(
        &args.catalog_url,
        &args.catalog_client_id,
        &args.catalog_client_secret,
    )
    .with_timeout(timeout);
    let sink = Arc::new(
        CatalogClient::connect(catalog_config)
            .await
            .context("Failed to connect to catalog")?,
    );

    let config = SyncConfig::new(&args.project, args.regions.clone())
        .with_repository_blueprint(&args.repository_blueprint)
        .with_image_blueprint(&args.image_blueprint);

    let report = Syncer::new(config, source, sink)
        .run()
        .await
        .context("Sync failed")?;

    println!("Sync complete");
    println!("  Repositories: {}", report.repositories);
    println!("  Images:       {}", report.images);
    println!("  Upserted:     {}", report.upserted);
    println!("  Skipped:      {}", report.skipped);

    Ok(())
}

/// Picks the listing-API authentication from an optional pre-acquired token.
fn registry_auth(token: Option<&str>) -> RegistryAuth {
    token.map_or(RegistryAuth::None, RegistryAuth::bearer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_auth_none() {
        assert!(matches!(registry_auth(None), RegistryAuth::None));
    }

    #[test]
    fn test_registry_auth_bearer() {
        match registry_auth(Some("tok")) {
            RegistryAuth::Bearer { token } => assert_eq!(token, "tok"),
            RegistryAuth::None => panic!("expected bearer auth"),
        }
    }
}
