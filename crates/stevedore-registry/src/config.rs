//! Configuration types for the listing client.

use std::time::Duration;

/// Default endpoint of the artifact-registry REST API.
pub const DEFAULT_ENDPOINT: &str = "https://artifactregistry.googleapis.com/v1";

/// Configuration for the listing client.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL of the listing API.
    pub endpoint: String,

    /// Authentication configuration.
    pub auth: RegistryAuth,

    /// Page-size hint passed to every listing call. A tunable, not a
    /// correctness requirement: the paginator follows continuation cursors
    /// regardless of how the provider slices pages.
    pub page_size: i32,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth: RegistryAuth::None,
            page_size: 1,
            timeout: Duration::from_secs(30),
            user_agent: format!("stevedore-registry/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration pointing at the given endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use stevedore_registry::RegistryConfig;
    ///
    /// let config = RegistryConfig::new("https://registry.example.com/v1");
    /// assert_eq!(config.endpoint, "https://registry.example.com/v1");
    /// ```
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Sets the authentication method.
    #[must_use]
    pub fn with_auth(mut self, auth: RegistryAuth) -> Self {
        self.auth = auth;
        self
    }

    /// Sets the page-size hint.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Authentication methods for the listing API.
///
/// Token acquisition is a collaborator's concern: the token arrives here
/// already minted (environment, metadata server, workload identity).
#[derive(Debug, Clone)]
pub enum RegistryAuth {
    /// No authentication (local emulators, tests).
    None,

    /// Bearer token authentication.
    Bearer {
        /// Token value.
        token: String,
    },
}

impl RegistryAuth {
    /// Creates bearer token authentication.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.page_size, 1);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_methods() {
        let config = RegistryConfig::new("https://registry.example.com/v1")
            .with_auth(RegistryAuth::bearer("tok"))
            .with_page_size(50)
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.page_size, 50);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(matches!(config.auth, RegistryAuth::Bearer { token } if token == "tok"));
    }
}
