#![deny(unsafe_code)]

use std::collections::BTreeMap;

use hsph_model::Domain;

use crate::error::{FixtureError, Result};
use crate::types::{FixtureItem, FixtureType};

/// Read-only access to domain-scoped fixture tables.
///
/// The report layer treats this as an external collaborator: a small number
/// of synchronous fetches per request, no caching on this side.
pub trait FixtureStore {
    /// The type descriptor registered for `tag` under `domain`, if any.
    fn fixture_type(&self, domain: &Domain, tag: &str) -> Result<Option<FixtureType>>;

    /// All items of the given type.
    ///
    /// Accepts `None` so callers can pass an unresolved lookup straight
    /// through; the missing type surfaces as [`FixtureError::TypeNotFound`]
    /// here, at the final lookup, not earlier.
    fn items(&self, domain: &Domain, fixture_type: Option<&FixtureType>)
    -> Result<Vec<FixtureItem>>;
}

/// `BTreeMap`-backed store, used by tests and embedders that assemble
/// fixtures in process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    types: BTreeMap<(String, String), FixtureType>,
    items: BTreeMap<String, Vec<FixtureItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fixture type and returns the stored descriptor.
    pub fn register(&mut self, domain: &Domain, tag: &str, fields: Vec<String>) -> FixtureType {
        let fixture_type = FixtureType::new(domain.as_str(), tag, fields);
        self.types.insert(
            (domain.as_str().to_string(), tag.to_string()),
            fixture_type.clone(),
        );
        fixture_type
    }

    pub fn push_item(&mut self, item: FixtureItem) {
        self.items.entry(item.type_id.clone()).or_default().push(item);
    }
}

impl FixtureStore for MemoryStore {
    fn fixture_type(&self, domain: &Domain, tag: &str) -> Result<Option<FixtureType>> {
        Ok(self
            .types
            .get(&(domain.as_str().to_string(), tag.to_string()))
            .cloned())
    }

    fn items(
        &self,
        domain: &Domain,
        fixture_type: Option<&FixtureType>,
    ) -> Result<Vec<FixtureItem>> {
        let fixture_type = fixture_type.ok_or_else(|| FixtureError::TypeNotFound {
            domain: domain.as_str().to_string(),
        })?;
        Ok(self
            .items
            .get(&fixture_type.id)
            .cloned()
            .unwrap_or_default())
    }
}
