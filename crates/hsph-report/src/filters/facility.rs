//! Facility selectors backed by the `site` fixture table.

use hsph_fixtures::FixtureStore;
use hsph_model::Domain;
use tracing::debug;

use crate::error::Result;
use crate::filters::site::SiteFilter;
use crate::filters::{FilterOption, ReportFilter};

/// Flat list of facilities by name.
pub struct FacilityFilter;

impl ReportFilter for FacilityFilter {
    fn slug(&self) -> &'static str {
        "facility"
    }

    fn label(&self) -> &'static str {
        "Facility"
    }

    fn default_text(&self) -> &'static str {
        "All Facilities..."
    }

    fn options(&self, store: &dyn FixtureStore, domain: &Domain) -> Result<Vec<FilterOption>> {
        let mut options = Vec::new();
        for record in SiteFilter::site_fixtures(store, domain)? {
            match (record.site_id, record.site_name) {
                (Some(id), Some(name)) => options.push(FilterOption::new(id, name)),
                (id, _) => debug!(
                    site_id = id.as_deref().unwrap_or(""),
                    "site fixture missing id or name, skipping"
                ),
            }
        }
        Ok(options)
    }
}

/// Onboarding status of a facility.
pub struct FacilityStatusFilter;

impl ReportFilter for FacilityStatusFilter {
    fn slug(&self) -> &'static str {
        "facility_status"
    }

    fn label(&self) -> &'static str {
        "Facility Status"
    }

    fn default_text(&self) -> &'static str {
        "Select Status..."
    }

    fn options(&self, _store: &dyn FixtureStore, _domain: &Domain) -> Result<Vec<FilterOption>> {
        Ok(vec![
            FilterOption::new("-1", "On Board"),
            FilterOption::new("0", "S.B.R. Deployed"),
            FilterOption::new("1", "Baseline"),
            FilterOption::new("2", "Trial Data"),
        ])
    }
}
