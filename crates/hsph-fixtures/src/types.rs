#![deny(unsafe_code)]

use std::collections::BTreeMap;

/// Descriptor for one fixture table registered under a domain.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FixtureType {
    /// Stable identifier, `<domain>/<tag>`.
    pub id: String,
    pub domain: String,
    pub tag: String,
    /// Field names this table carries, in column order.
    pub fields: Vec<String>,
}

impl FixtureType {
    pub fn new(domain: &str, tag: &str, fields: Vec<String>) -> Self {
        Self {
            id: format!("{domain}/{tag}"),
            domain: domain.to_string(),
            tag: tag.to_string(),
            fields,
        }
    }
}

/// One row of a fixture table: the raw string field bag.
///
/// Blank cells are omitted from the bag at ingestion, so absence and
/// blankness look the same to consumers. Typed views over the bag live in
/// `hsph-model`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FixtureItem {
    pub type_id: String,
    pub fields: BTreeMap<String, String>,
}

impl FixtureItem {
    pub fn new<I, K, V>(fixture_type: &FixtureType, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            type_id: fixture_type.id.clone(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
