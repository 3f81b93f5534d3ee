//! Catalog entity shape.
//!
//! Entities are transient: constructed by the mapper, sent to the catalog's
//! upsert endpoint, and discarded. The catalog service is the sole system of
//! record; identifiers are provider resource names used verbatim so the
//! catalog's upsert-by-identifier semantics own deduplication.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// An entity in the catalog's fixed schema.
///
/// Ordered maps keep serialization byte-stable: mapping the same record twice
/// yields identical JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntity {
    /// Caller-supplied identifier the catalog upserts by.
    pub identifier: String,

    /// Human-readable title.
    pub title: String,

    /// Scalar properties of the entity.
    pub properties: BTreeMap<String, Value>,

    /// Named references to other entities' identifiers.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relations: BTreeMap<String, String>,
}

impl CatalogEntity {
    /// Creates an entity with the given identifier and title.
    #[must_use]
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            properties: BTreeMap::new(),
            relations: BTreeMap::new(),
        }
    }

    /// Adds a property.
    #[must_use]
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// Adds a relation to another entity's identifier.
    #[must_use]
    pub fn with_relation(mut self, key: &str, target: impl Into<String>) -> Self {
        self.relations.insert(key.to_string(), target.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_builder() {
        let entity = CatalogEntity::new("projects/p/repositories/r", "r")
            .with_property("format", "DOCKER")
            .with_relation("repository", "projects/p/repositories/r");

        assert_eq!(entity.identifier, "projects/p/repositories/r");
        assert_eq!(entity.properties["format"], Value::from("DOCKER"));
        assert_eq!(entity.relations["repository"], "projects/p/repositories/r");
    }

    #[test]
    fn test_empty_relations_not_serialized() {
        let entity = CatalogEntity::new("id", "title").with_property("format", Value::Null);
        let json = serde_json::to_string(&entity).unwrap();
        assert!(!json.contains("relations"));
        assert!(json.contains(r#""format":null"#));
    }

    #[test]
    fn test_serialization_is_stable() {
        let build = || {
            CatalogEntity::new("id", "title")
                .with_property("b", 2)
                .with_property("a", 1)
        };
        let first = serde_json::to_vec(&build()).unwrap();
        let second = serde_json::to_vec(&build()).unwrap();
        assert_eq!(first, second);
    }
}
