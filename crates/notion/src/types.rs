//! Wire types for the Notion database API.

use indexmap::IndexMap;
use serde::Deserialize;

/// A Notion database object, reduced to the fields this service reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub id: String,
    /// Property schema keyed by property name. Insertion-ordered so the
    /// column classifier sees properties in the order the provider
    /// returned them.
    pub properties: IndexMap<String, Property>,
}

/// A single property in a database schema.
///
/// The `type` tag is an open vocabulary owned by Notion; this service
/// recognizes a subset and ignores the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Database {
    /// Adapt the property schema to `(name, type tag)` pairs in provider
    /// order, the shape the column classifier consumes.
    pub fn column_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, prop)| (name.as_str(), prop.kind.as_str()))
    }
}
