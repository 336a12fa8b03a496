//! Report filter fields.
//!
//! Each filter renders a selector in the report UI and translates the
//! selected value into a query constraint. Fixture-backed filters take the
//! store and domain explicitly on every call; nothing here holds state
//! across requests.

pub mod facility;
pub mod ihf_chf;
pub mod site;
pub mod status;
pub mod workers;

use hsph_fixtures::FixtureStore;
use hsph_model::Domain;
use serde::Serialize;

use crate::error::Result;

/// One selectable option: the query value and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single-select report filter.
pub trait ReportFilter {
    /// Query-string parameter name.
    fn slug(&self) -> &'static str;

    /// Display label for the selector.
    fn label(&self) -> &'static str;

    /// Text shown when nothing is selected.
    fn default_text(&self) -> &'static str;

    /// The selectable options. Static filters ignore the store.
    fn options(&self, store: &dyn FixtureStore, domain: &Domain) -> Result<Vec<FilterOption>>;
}
