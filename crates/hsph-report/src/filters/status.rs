//! Fixed-option case and allocation filters.

use hsph_fixtures::FixtureStore;
use hsph_model::Domain;

use crate::error::Result;
use crate::filters::{FilterOption, ReportFilter};

/// Home visit status of a case.
pub struct CaseStatusFilter;

impl ReportFilter for CaseStatusFilter {
    fn slug(&self) -> &'static str {
        "case_status"
    }

    fn label(&self) -> &'static str {
        "Home Visit Status"
    }

    fn default_text(&self) -> &'static str {
        "Select Status..."
    }

    fn options(&self, _store: &dyn FixtureStore, _domain: &Domain) -> Result<Vec<FilterOption>> {
        Ok(vec![
            FilterOption::new("closed", "CLOSED"),
            FilterOption::new("open", "OPEN"),
        ])
    }
}

/// Restricts birth data to referred-in births.
pub struct ReferredInStatusFilter;

impl ReportFilter for ReferredInStatusFilter {
    fn slug(&self) -> &'static str {
        "referred_in_status"
    }

    fn label(&self) -> &'static str {
        "Referred In Status"
    }

    fn default_text(&self) -> &'static str {
        "All Birth Data"
    }

    fn options(&self, _store: &dyn FixtureStore, _domain: &Domain) -> Result<Vec<FilterOption>> {
        Ok(vec![FilterOption::new("referred", "Only Referred In Births")])
    }
}

/// Who a case is allocated to.
pub struct AllocatedToFilter;

impl ReportFilter for AllocatedToFilter {
    fn slug(&self) -> &'static str {
        "allocated_to"
    }

    fn label(&self) -> &'static str {
        "Allocated To"
    }

    fn default_text(&self) -> &'static str {
        "All"
    }

    fn options(&self, _store: &dyn FixtureStore, _domain: &Domain) -> Result<Vec<FilterOption>> {
        Ok(vec![
            FilterOption::new("cati", "CATI"),
            FilterOption::new("field", "Field"),
        ])
    }
}
