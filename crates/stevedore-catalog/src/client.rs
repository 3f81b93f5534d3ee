//! Upsert client for the catalog's entity API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use stevedore_core::CatalogEntity;

use crate::auth;
use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// Outcome of one upsert attempt.
///
/// Modeled as data rather than a swallowed failure so callers and tests can
/// assert on per-entity results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The catalog accepted the entity (created or merged).
    Upserted,

    /// The entity was rejected or the call failed; the record was skipped
    /// and the scan continues.
    Skipped {
        /// HTTP status of the rejection, when a response was received.
        status: Option<u16>,
        /// Reason reported by the catalog or the transport.
        reason: String,
    },
}

impl UpsertOutcome {
    /// Returns true if the catalog accepted the entity.
    #[must_use]
    pub const fn is_upserted(&self) -> bool {
        matches!(self, Self::Upserted)
    }
}

/// Sink for mapped entities.
///
/// Implemented by [`CatalogClient`] against the real API and by in-memory
/// stubs in tests.
#[async_trait]
pub trait EntitySink: Send + Sync {
    /// Sends one entity to the upsert-by-identifier endpoint with
    /// merge-on-conflict semantics.
    ///
    /// # Errors
    ///
    /// Only request-construction failures surface as errors; every rejection
    /// or transport failure of the call itself is an
    /// [`UpsertOutcome::Skipped`].
    async fn upsert(
        &self,
        blueprint: &str,
        entity: &CatalogEntity,
    ) -> Result<UpsertOutcome, CatalogError>;
}

/// Client for the catalog's entity API.
///
/// Holds the one HTTP client and access token shared by every upsert call of
/// a run.
#[derive(Debug)]
pub struct CatalogClient {
    config: CatalogConfig,
    http: reqwest::Client,
    token: String,
}

impl CatalogClient {
    /// Builds the HTTP client and acquires an access token for the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created or the catalog
    /// refuses to mint a token.
    pub async fn connect(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| CatalogError::ConnectionFailed {
                url: config.base_url.clone(),
                source: e,
            })?;

        let token = auth::access_token(&http, &config).await?;
        tracing::debug!(catalog = %config.base_url, "acquired catalog access token");

        Ok(Self {
            config,
            http,
            token,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn auth_headers(&self) -> Result<HeaderMap, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|_| {
                CatalogError::AuthenticationFailed {
                    message: "invalid token".to_string(),
                }
            })?,
        );
        Ok(headers)
    }
}

#[async_trait]
impl EntitySink for CatalogClient {
    async fn upsert(
        &self,
        blueprint: &str,
        entity: &CatalogEntity,
    ) -> Result<UpsertOutcome, CatalogError> {
        let url = format!("{}/blueprints/{blueprint}/entities", self.config.base_url);

        let result = self
            .http
            .post(&url)
            .query(&[("upsert", "true"), ("merge", "true")])
            .headers(self.auth_headers()?)
            .json(entity)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(blueprint, identifier = %entity.identifier, "entity upserted");
                Ok(UpsertOutcome::Upserted)
            }
            Ok(response) => {
                let status = response.status().as_u16();
                let reason = response.text().await.unwrap_or_default();
                tracing::warn!(
                    blueprint,
                    payload = ?entity,
                    status,
                    reason,
                    "catalog rejected entity, skipping"
                );
                Ok(UpsertOutcome::Skipped {
                    status: Some(status),
                    reason,
                })
            }
            Err(e) => {
                tracing::warn!(
                    blueprint,
                    payload = ?entity,
                    error = %e,
                    "upsert call failed, skipping"
                );
                Ok(UpsertOutcome::Skipped {
                    status: e.status().map(|s| s.as_u16()),
                    reason: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_upserted() {
        assert!(UpsertOutcome::Upserted.is_upserted());
        assert!(!UpsertOutcome::Skipped {
            status: Some(422),
            reason: "schema mismatch".to_string(),
        }
        .is_upserted());
    }

    #[test]
    fn test_entity_wire_shape() {
        let entity = CatalogEntity::new("projects/p/repositories/r", "r")
            .with_property("format", "DOCKER")
            .with_relation("repository", "parent");

        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["identifier"], "projects/p/repositories/r");
        assert_eq!(json["title"], "r");
        assert_eq!(json["properties"]["format"], "DOCKER");
        assert_eq!(json["relations"]["repository"], "parent");
    }
}
