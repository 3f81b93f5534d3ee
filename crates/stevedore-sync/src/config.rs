//! Configuration types for the sync orchestrator.

/// Default blueprint kind for repository entities.
pub const DEFAULT_REPOSITORY_BLUEPRINT: &str = "artifactRepository";

/// Default blueprint kind for image entities.
pub const DEFAULT_IMAGE_BLUEPRINT: &str = "containerImage";

/// Configuration for one sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Cloud project whose inventory is scanned.
    pub project: String,

    /// Regions to scan, in configured order.
    pub regions: Vec<String>,

    /// Blueprint kind repository entities are filed under.
    pub repository_blueprint: String,

    /// Blueprint kind image entities are filed under.
    pub image_blueprint: String,
}

impl SyncConfig {
    /// Creates a configuration for the given project and regions.
    ///
    /// # Examples
    ///
    /// ```
    /// use stevedore_sync::SyncConfig;
    ///
    /// let config = SyncConfig::new("my-project", vec!["us-east1".to_string()]);
    /// assert_eq!(config.repository_blueprint, "artifactRepository");
    /// ```
    #[must_use]
    pub fn new(project: impl Into<String>, regions: Vec<String>) -> Self {
        Self {
            project: project.into(),
            regions,
            repository_blueprint: DEFAULT_REPOSITORY_BLUEPRINT.to_string(),
            image_blueprint: DEFAULT_IMAGE_BLUEPRINT.to_string(),
        }
    }

    /// Sets the blueprint kind for repository entities.
    #[must_use]
    pub fn with_repository_blueprint(mut self, blueprint: impl Into<String>) -> Self {
        self.repository_blueprint = blueprint.into();
        self
    }

    /// Sets the blueprint kind for image entities.
    #[must_use]
    pub fn with_image_blueprint(mut self, blueprint: impl Into<String>) -> Self {
        self.image_blueprint = blueprint.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_blueprints() {
        let config = SyncConfig::new("p", vec!["us".to_string()]);
        assert_eq!(config.repository_blueprint, DEFAULT_REPOSITORY_BLUEPRINT);
        assert_eq!(config.image_blueprint, DEFAULT_IMAGE_BLUEPRINT);
    }

    #[test]
    fn test_blueprint_overrides() {
        let config = SyncConfig::new("p", Vec::new())
            .with_repository_blueprint("repo")
            .with_image_blueprint("image");
        assert_eq!(config.repository_blueprint, "repo");
        assert_eq!(config.image_blueprint, "image");
    }
}
