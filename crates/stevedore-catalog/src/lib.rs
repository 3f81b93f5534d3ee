//! # Stevedore Catalog
//!
//! Client for the catalog's upsert-by-identifier API.
//!
//! [`CatalogClient::connect`] acquires one access token and builds one HTTP
//! client for the whole run; every entity is then sent through
//! [`EntitySink::upsert`] with merge-on-conflict semantics. A rejected entity
//! is a [`UpsertOutcome::Skipped`] outcome, not an error — the scan carries
//! on with the next record.
//!
//! ## Quick Start
//!
//! ```no_run
//! use stevedore_catalog::{CatalogClient, CatalogConfig, EntitySink};
//! use stevedore_core::CatalogEntity;
//!
//! # async fn example() -> Result<(), stevedore_catalog::CatalogError> {
//! let config = CatalogConfig::new("https://api.getport.io/v1", "client-id", "client-secret");
//! let catalog = CatalogClient::connect(config).await?;
//!
//! let entity = CatalogEntity::new("projects/p/repositories/r", "r");
//! let outcome = catalog.upsert("artifactRepository", &entity).await?;
//! println!("upserted: {}", outcome.is_upserted());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod auth;
mod client;
mod config;
mod error;

pub use client::{CatalogClient, EntitySink, UpsertOutcome};
pub use config::{CatalogConfig, DEFAULT_BASE_URL};
pub use error::CatalogError;
