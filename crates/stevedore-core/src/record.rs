//! Provider resource records produced by the listing API.
//!
//! These types deserialize directly from the provider's camelCase JSON
//! listing responses. Enum fields tolerate values this client does not know
//! about, and int64 sizes accept both the provider's string encoding and
//! plain numbers.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Package format of an artifact repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepositoryFormat {
    /// Docker and OCI container images.
    Docker,
    /// Maven artifacts.
    Maven,
    /// npm packages.
    Npm,
    /// APT packages.
    Apt,
    /// Yum packages.
    Yum,
    /// Python packages.
    Python,
    /// Kubeflow pipeline templates.
    Kfp,
    /// Go modules.
    Go,
    /// Generic artifacts.
    Generic,
    /// Format value not known to this client.
    #[default]
    #[serde(other)]
    Unknown,
}

impl RepositoryFormat {
    /// Returns the catalog label for this format, or `None` for values the
    /// translation table does not cover.
    #[must_use]
    pub const fn catalog_label(self) -> Option<&'static str> {
        match self {
            Self::Docker => Some("DOCKER"),
            Self::Maven => Some("MAVEN"),
            Self::Npm => Some("NPM"),
            Self::Apt => Some("APT"),
            Self::Yum => Some("YUM"),
            Self::Python => Some("PYTHON"),
            Self::Kfp => Some("KFP"),
            Self::Go => Some("GO"),
            Self::Generic => Some("GENERIC"),
            Self::Unknown => None,
        }
    }
}

/// Mode of an artifact repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepositoryMode {
    /// Standard repository hosting uploaded artifacts.
    StandardRepository,
    /// Virtual repository aggregating upstream repositories.
    VirtualRepository,
    /// Remote repository proxying an external source.
    RemoteRepository,
    /// Mode value not known to this client.
    #[default]
    #[serde(other)]
    Unknown,
}

impl RepositoryMode {
    /// Returns the catalog label for this mode, or `None` for values the
    /// translation table does not cover.
    #[must_use]
    pub const fn catalog_label(self) -> Option<&'static str> {
        match self {
            Self::StandardRepository => Some("STANDARD_REPOSITORY"),
            Self::VirtualRepository => Some("VIRTUAL_REPOSITORY"),
            Self::RemoteRepository => Some("REMOTE_REPOSITORY"),
            Self::Unknown => None,
        }
    }
}

/// A repository resource as returned by the provider listing API.
///
/// Scoped to one pagination call; never mutated after deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositoryRecord {
    /// Fully-qualified resource name
    /// (`projects/{project}/locations/{region}/repositories/{repository}`).
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Package format of the repository.
    pub format: RepositoryFormat,

    /// User-supplied labels.
    pub labels: BTreeMap<String, String>,

    /// Repository mode.
    pub mode: RepositoryMode,

    /// Creation timestamp.
    pub create_time: Option<DateTime<Utc>>,

    /// Last-update timestamp.
    pub update_time: Option<DateTime<Utc>>,

    /// Customer-managed encryption key reference, if any.
    pub kms_key_name: String,

    /// Total stored size in bytes.
    #[serde(deserialize_with = "de_int64")]
    pub size_bytes: u64,

    /// Whether the repository satisfies zone separation.
    pub satisfies_pzs: bool,
}

/// A container image resource, always listed under an owning repository.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageRecord {
    /// Fully-qualified resource name
    /// (`{repository name}/dockerImages/{image}`).
    pub name: String,

    /// Registry URI of the image.
    pub uri: String,

    /// Tags attached to the image, in provider order.
    pub tags: Vec<String>,

    /// Image size in bytes.
    #[serde(deserialize_with = "de_int64")]
    pub image_size_bytes: u64,

    /// Upload timestamp.
    pub upload_time: Option<DateTime<Utc>>,

    /// Media type of the image manifest.
    pub media_type: String,

    /// Build timestamp, if the image carries one.
    pub build_time: Option<DateTime<Utc>>,

    /// Last-update timestamp.
    pub update_time: Option<DateTime<Utc>>,
}

/// Deserializes an int64 field that the provider encodes as a decimal string.
fn de_int64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct Int64Visitor;

    impl serde::de::Visitor<'_> for Int64Visitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an unsigned integer or a decimal string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<u64, E> {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<u64, E>
        where
            E: serde::de::Error,
        {
            u64::try_from(value).map_err(E::custom)
        }

        fn visit_str<E>(self, value: &str) -> Result<u64, E>
        where
            E: serde::de::Error,
        {
            value.parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(Int64Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_from_provider_json() {
        let json = r#"{
            "name": "projects/p/locations/us-east1/repositories/r1",
            "description": "team images",
            "format": "DOCKER",
            "labels": {"team": "platform"},
            "mode": "STANDARD_REPOSITORY",
            "createTime": "2024-03-01T10:00:00Z",
            "updateTime": "2024-03-02T10:00:00Z",
            "kmsKeyName": "projects/p/locations/us-east1/keyRings/kr/cryptoKeys/k",
            "sizeBytes": "2048",
            "satisfiesPzs": true
        }"#;

        let record: RepositoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "projects/p/locations/us-east1/repositories/r1");
        assert_eq!(record.format, RepositoryFormat::Docker);
        assert_eq!(record.mode, RepositoryMode::StandardRepository);
        assert_eq!(record.size_bytes, 2048);
        assert_eq!(record.labels.get("team").map(String::as_str), Some("platform"));
        assert!(record.satisfies_pzs);
    }

    #[test]
    fn test_unknown_format_deserializes() {
        let record: RepositoryRecord =
            serde_json::from_str(r#"{"name": "r", "format": "SWIFT"}"#).unwrap();
        assert_eq!(record.format, RepositoryFormat::Unknown);
        assert_eq!(record.format.catalog_label(), None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let record: RepositoryRecord = serde_json::from_str("{}").unwrap();
        assert!(record.name.is_empty());
        assert_eq!(record.size_bytes, 0);
        assert!(record.create_time.is_none());
    }

    #[test]
    fn test_size_bytes_accepts_number() {
        let record: RepositoryRecord =
            serde_json::from_str(r#"{"sizeBytes": 512}"#).unwrap();
        assert_eq!(record.size_bytes, 512);
    }

    #[test]
    fn test_image_from_provider_json() {
        let json = r#"{
            "name": "projects/p/locations/us-east1/repositories/r1/dockerImages/img1",
            "uri": "us-east1-docker.pkg.dev/p/r1/img1@sha256:abc",
            "tags": ["latest", "v1"],
            "imageSizeBytes": "123456",
            "uploadTime": "2024-03-03T08:00:00Z",
            "mediaType": "application/vnd.docker.distribution.manifest.v2+json"
        }"#;

        let record: ImageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tags, vec!["latest", "v1"]);
        assert_eq!(record.image_size_bytes, 123_456);
        assert!(record.build_time.is_none());
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(RepositoryFormat::Docker.catalog_label(), Some("DOCKER"));
        assert_eq!(RepositoryFormat::Go.catalog_label(), Some("GO"));
        assert_eq!(RepositoryMode::VirtualRepository.catalog_label(), Some("VIRTUAL_REPOSITORY"));
        assert_eq!(RepositoryMode::Unknown.catalog_label(), None);
    }
}
