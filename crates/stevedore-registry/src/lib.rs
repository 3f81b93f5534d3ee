//! # Stevedore Registry
//!
//! Listing client for a cloud artifact registry, exposing the inventory as
//! lazy paginated sequences of records.
//!
//! The client wraps the provider's two paginated read operations —
//! repositories under a `(project, region)` scope and container images under
//! a repository — behind the [`ArtifactSource`] capability trait. The generic
//! [`Paginator`] follows continuation cursors transparently, yielding one
//! record at a time.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use stevedore_registry::{repositories, RegistryClient, RegistryConfig};
//!
//! # async fn example() -> Result<(), stevedore_registry::RegistryError> {
//! let client = Arc::new(RegistryClient::new(RegistryConfig::default())?);
//!
//! let mut pages = repositories(client, "my-project", "us-east1");
//! while let Some(repository) = pages.try_next().await? {
//!     println!("{}", repository.name);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod client;
mod config;
mod error;
mod paginator;

pub use client::{ArtifactSource, RegistryClient};
pub use config::{RegistryAuth, RegistryConfig, DEFAULT_ENDPOINT};
pub use error::RegistryError;
pub use paginator::{images, repositories, Page, Paginator};
