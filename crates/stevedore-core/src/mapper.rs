//! Pure translation from provider records to catalog entities.
//!
//! Both functions are total: any record that deserialized successfully maps
//! to exactly one entity. Enum values outside the translation tables become
//! `null` properties rather than errors, and timestamps are rendered as
//! RFC 3339 text here so no provider-native time representation crosses the
//! catalog boundary.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::entity::CatalogEntity;
use crate::record::{ImageRecord, RepositoryRecord};

/// Maps a repository record to a repository entity.
///
/// The identifier is the record's fully-qualified name, used verbatim; the
/// title is its last path segment.
#[must_use]
pub fn map_repository(record: &RepositoryRecord) -> CatalogEntity {
    let labels: serde_json::Map<String, Value> = record
        .labels
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect();

    CatalogEntity::new(&record.name, short_name(&record.name))
        .with_property("description", record.description.as_str())
        .with_property("format", record.format.catalog_label())
        .with_property("labels", Value::Object(labels))
        .with_property("mode", record.mode.catalog_label())
        .with_property("createTime", rfc3339(record.create_time))
        .with_property("updateTime", rfc3339(record.update_time))
        .with_property("kmsKeyName", record.kms_key_name.as_str())
        .with_property("sizeBytes", record.size_bytes)
        .with_property("satisfiesPzs", record.satisfies_pzs)
}

/// Maps an image record to an image entity carrying a `repository` relation
/// to its parent repository's identifier.
#[must_use]
pub fn map_image(record: &ImageRecord, repository_identifier: &str) -> CatalogEntity {
    let tags: Vec<Value> = record
        .tags
        .iter()
        .map(|tag| Value::String(tag.clone()))
        .collect();

    CatalogEntity::new(&record.name, short_name(&record.name))
        .with_property("uri", record.uri.as_str())
        .with_property("tags", Value::Array(tags))
        .with_property("mediaType", record.media_type.as_str())
        .with_property("sizeBytes", record.image_size_bytes)
        .with_property("uploadTime", rfc3339(record.upload_time))
        .with_property("buildTime", rfc3339(record.build_time))
        .with_property("updateTime", rfc3339(record.update_time))
        .with_relation("repository", repository_identifier)
}

/// Returns the last `/`-segment of a fully-qualified resource name.
fn short_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

fn rfc3339(timestamp: Option<DateTime<Utc>>) -> Option<String> {
    timestamp.map(|t| t.to_rfc3339())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::TimeZone;

    use super::*;
    use crate::record::{RepositoryFormat, RepositoryMode};

    fn repository() -> RepositoryRecord {
        RepositoryRecord {
            name: "projects/p/locations/us-east1/repositories/r1".to_string(),
            description: "team images".to_string(),
            format: RepositoryFormat::Docker,
            labels: BTreeMap::from([("team".to_string(), "platform".to_string())]),
            mode: RepositoryMode::StandardRepository,
            create_time: Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()),
            update_time: Some(Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap()),
            kms_key_name: String::new(),
            size_bytes: 2048,
            satisfies_pzs: false,
        }
    }

    fn image() -> ImageRecord {
        ImageRecord {
            name: "projects/p/locations/us-east1/repositories/r1/dockerImages/img1".to_string(),
            uri: "us-east1-docker.pkg.dev/p/r1/img1@sha256:abc".to_string(),
            tags: vec!["latest".to_string()],
            image_size_bytes: 123_456,
            upload_time: Some(Utc.with_ymd_and_hms(2024, 3, 3, 8, 0, 0).unwrap()),
            media_type: "application/vnd.docker.distribution.manifest.v2+json".to_string(),
            build_time: None,
            update_time: None,
        }
    }

    #[test]
    fn test_repository_identifier_and_title() {
        let entity = map_repository(&repository());
        assert_eq!(entity.identifier, "projects/p/locations/us-east1/repositories/r1");
        assert_eq!(entity.title, "r1");
    }

    #[test]
    fn test_repository_properties() {
        let entity = map_repository(&repository());
        assert_eq!(entity.properties["format"], Value::from("DOCKER"));
        assert_eq!(entity.properties["mode"], Value::from("STANDARD_REPOSITORY"));
        assert_eq!(entity.properties["sizeBytes"], Value::from(2048));
        assert_eq!(
            entity.properties["createTime"],
            Value::from("2024-03-01T10:00:00+00:00")
        );
        assert_eq!(entity.properties["labels"]["team"], Value::from("platform"));
        assert!(entity.relations.is_empty());
    }

    #[test]
    fn test_unknown_format_maps_to_null() {
        let record = RepositoryRecord {
            format: RepositoryFormat::Unknown,
            mode: RepositoryMode::Unknown,
            ..repository()
        };
        let entity = map_repository(&record);
        assert_eq!(entity.properties["format"], Value::Null);
        assert_eq!(entity.properties["mode"], Value::Null);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let record = repository();
        let first = serde_json::to_vec(&map_repository(&record)).unwrap();
        let second = serde_json::to_vec(&map_repository(&record)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_image_relation_points_at_parent() {
        let parent = "projects/p/locations/us-east1/repositories/r1";
        let entity = map_image(&image(), parent);
        assert_eq!(entity.relations["repository"], parent);
        assert_eq!(entity.title, "img1");
    }

    #[test]
    fn test_image_properties() {
        let entity = map_image(&image(), "parent");
        assert_eq!(
            entity.properties["tags"],
            Value::Array(vec![Value::from("latest")])
        );
        assert_eq!(entity.properties["buildTime"], Value::Null);
        assert_eq!(entity.properties["sizeBytes"], Value::from(123_456));
    }

    #[test]
    fn test_short_name_without_separator() {
        assert_eq!(short_name("r1"), "r1");
    }
}
