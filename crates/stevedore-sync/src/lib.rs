//! # Stevedore Sync
//!
//! Orchestrator for the artifact-registry → catalog sync.
//!
//! The [`Syncer`] drives the nested iteration: for each validated region, it
//! pages through repositories; for each repository, it maps and upserts the
//! repository entity, then pages through that repository's images, mapping
//! and upserting each one with a relation back to its parent.
//!
//! Regions are validated before any network call. Listing failures abort the
//! run; upsert rejections are counted and skipped. Every run is a full
//! re-scan — no state survives between runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use stevedore_catalog::{CatalogClient, CatalogConfig};
//! use stevedore_registry::{RegistryClient, RegistryConfig};
//! use stevedore_sync::{SyncConfig, Syncer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = Arc::new(RegistryClient::new(RegistryConfig::default())?);
//!     let catalog = CatalogConfig::new("https://api.getport.io/v1", "id", "secret");
//!     let sink = Arc::new(CatalogClient::connect(catalog).await?);
//!
//!     let config = SyncConfig::new("my-project", vec!["us-east1".to_string()]);
//!     let report = Syncer::new(config, source, sink).run().await?;
//!
//!     println!("upserted {} entities", report.upserted);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod report;

use std::sync::Arc;

use stevedore_catalog::EntitySink;
use stevedore_core::{map_image, map_repository, validate_regions};
use stevedore_registry::{images, repositories, ArtifactSource};

pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use report::SyncReport;

/// The sync orchestrator.
///
/// Holds the listing source, the entity sink, and the run configuration;
/// [`run`](Self::run) executes one full scan.
pub struct Syncer {
    config: SyncConfig,
    source: Arc<dyn ArtifactSource>,
    sink: Arc<dyn EntitySink>,
}

impl Syncer {
    /// Creates a syncer over the given listing source and entity sink.
    pub fn new(
        config: SyncConfig,
        source: Arc<dyn ArtifactSource>,
        sink: Arc<dyn EntitySink>,
    ) -> Self {
        Self {
            config,
            source,
            sink,
        }
    }

    /// Runs one full sync: validate, then scan every configured region in
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Config`] before any network activity when a
    /// configured region is not in the allow-set, and [`SyncError::Listing`]
    /// when any listing call fails — there is no per-region isolation, so a
    /// failure in one region aborts the whole run.
    pub async fn run(&self) -> Result<SyncReport> {
        validate_regions(self.config.regions.iter().map(String::as_str))?;

        tracing::info!(
            project = %self.config.project,
            regions = self.config.regions.len(),
            "starting catalog sync"
        );

        let mut report = SyncReport::default();
        for region in &self.config.regions {
            self.sync_region(region, &mut report).await?;
        }

        tracing::info!(
            repositories = report.repositories,
            images = report.images,
            upserted = report.upserted,
            skipped = report.skipped,
            "sync complete"
        );

        Ok(report)
    }

    /// Scans one region: every repository, then every image under it.
    async fn sync_region(&self, region: &str, report: &mut SyncReport) -> Result<()> {
        tracing::info!(region, "scanning region");

        let mut repositories = repositories(
            Arc::clone(&self.source),
            self.config.project.clone(),
            region,
        );

        while let Some(repository) = repositories.try_next().await? {
            report.repositories += 1;

            let entity = map_repository(&repository);
            let outcome = self
                .sink
                .upsert(&self.config.repository_blueprint, &entity)
                .await?;
            report.record(&outcome);

            self.sync_images(&repository.name, report).await?;
        }

        Ok(())
    }

    /// Scans one repository's images, relating each entity to its parent.
    async fn sync_images(&self, repository: &str, report: &mut SyncReport) -> Result<()> {
        let mut images = images(Arc::clone(&self.source), repository);

        while let Some(image) = images.try_next().await? {
            report.images += 1;

            let entity = map_image(&image, repository);
            let outcome = self
                .sink
                .upsert(&self.config.image_blueprint, &entity)
                .await?;
            report.record(&outcome);
        }

        Ok(())
    }
}
