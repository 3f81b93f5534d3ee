//! HTTP client for the artifact-registry listing API.
//!
//! This module provides the concrete [`ArtifactSource`] implementation that
//! issues the provider's two paginated read operations over REST.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use stevedore_core::{ImageRecord, RepositoryRecord};

use crate::config::{RegistryAuth, RegistryConfig};
use crate::error::RegistryError;
use crate::paginator::Page;

/// Paged listing capability over the provider's artifact inventory.
///
/// Implemented by [`RegistryClient`] against the real API and by stubs in
/// tests. One call fetches one page; the [`Paginator`](crate::Paginator)
/// follows continuation cursors across calls.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Fetches one page of repositories under
    /// `projects/{project}/locations/{region}`.
    async fn repository_page(
        &self,
        project: &str,
        region: &str,
        page_token: Option<String>,
    ) -> Result<Page<RepositoryRecord>, RegistryError>;

    /// Fetches one page of images under the given fully-qualified repository
    /// name.
    async fn image_page(
        &self,
        repository: &str,
        page_token: Option<String>,
    ) -> Result<Page<ImageRecord>, RegistryError>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ListRepositoriesResponse {
    repositories: Vec<RepositoryRecord>,
    next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ListImagesResponse {
    docker_images: Vec<ImageRecord>,
    next_page_token: Option<String>,
}

/// Client for the artifact-registry listing API.
#[derive(Debug)]
pub struct RegistryClient {
    config: RegistryConfig,
    http: reqwest::Client,
}

impl RegistryClient {
    /// Creates a new listing client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| RegistryError::ConnectionFailed {
                url: config.endpoint.clone(),
                source: e,
            })?;

        Ok(Self { config, http })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Creates authentication headers based on configuration.
    fn auth_headers(&self) -> Result<HeaderMap, RegistryError> {
        let mut headers = HeaderMap::new();

        match &self.config.auth {
            RegistryAuth::None => {}
            RegistryAuth::Bearer { token } => {
                headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                        RegistryError::AuthenticationFailed {
                            message: "invalid token".to_string(),
                        }
                    })?,
                );
            }
        }

        Ok(headers)
    }

    /// Issues one listing call and decodes the page response.
    async fn list_page<R>(
        &self,
        url: &str,
        page_token: Option<String>,
    ) -> Result<R, RegistryError>
    where
        R: DeserializeOwned,
    {
        let mut query = vec![("pageSize", self.config.page_size.to_string())];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .http
            .get(url)
            .headers(self.auth_headers()?)
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RegistryError::HttpError {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl ArtifactSource for RegistryClient {
    async fn repository_page(
        &self,
        project: &str,
        region: &str,
        page_token: Option<String>,
    ) -> Result<Page<RepositoryRecord>, RegistryError> {
        let url = format!(
            "{}/projects/{project}/locations/{region}/repositories",
            self.config.endpoint
        );
        tracing::debug!(project, region, "listing repository page");

        let response: ListRepositoriesResponse = self.list_page(&url, page_token).await?;
        Ok(Page::new(response.repositories, response.next_page_token))
    }

    async fn image_page(
        &self,
        repository: &str,
        page_token: Option<String>,
    ) -> Result<Page<ImageRecord>, RegistryError> {
        let url = format!("{}/{repository}/dockerImages", self.config.endpoint);
        tracing::debug!(repository, "listing image page");

        let response: ListImagesResponse = self.list_page(&url, page_token).await?;
        Ok(Page::new(response.docker_images, response.next_page_token))
    }
}
