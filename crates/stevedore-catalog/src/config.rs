//! Configuration types for the catalog client.

use std::time::Duration;

/// Default base URL of the catalog API.
pub const DEFAULT_BASE_URL: &str = "https://api.getport.io/v1";

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API.
    pub base_url: String,

    /// Client identifier used to mint the access token.
    pub client_id: String,

    /// Client secret used to mint the access token.
    pub client_secret: String,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl CatalogConfig {
    /// Creates a configuration for the given catalog and credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use stevedore_catalog::CatalogConfig;
    ///
    /// let config = CatalogConfig::new("https://api.getport.io/v1", "id", "secret");
    /// assert_eq!(config.base_url, "https://api.getport.io/v1");
    /// ```
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("stevedore-catalog/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = CatalogConfig::new(DEFAULT_BASE_URL, "id", "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.client_id, "id");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_with_timeout() {
        let config = CatalogConfig::new(DEFAULT_BASE_URL, "id", "secret")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
