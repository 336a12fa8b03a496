//! The IHF/CHF filter and its facility partition.

use hsph_fixtures::FixtureStore;
use hsph_model::{ClassifiedSiteIds, Domain, FacilityPartition, SiteMap};
use tracing::debug;

use crate::error::Result;
use crate::filters::site::SiteFilter;
use crate::filters::{FilterOption, ReportFilter};

pub struct IhfChfFilter;

impl ReportFilter for IhfChfFilter {
    fn slug(&self) -> &'static str {
        "ihf_or_chf"
    }

    fn label(&self) -> &'static str {
        "IHF/CHF"
    }

    fn default_text(&self) -> &'static str {
        "IHF and CHF"
    }

    fn options(&self, _store: &dyn FixtureStore, _domain: &Domain) -> Result<Vec<FilterOption>> {
        Ok(vec![
            FilterOption::new("IHF", "IHF only"),
            FilterOption::new("CHF", "CHF only"),
        ])
    }
}

impl IhfChfFilter {
    /// Partitions the domain's facilities into IHF and CHF buckets.
    ///
    /// Facilities without a recognized classification are a known
    /// data-quality condition: skipped and logged, never an error.
    pub fn partition(store: &dyn FixtureStore, domain: &Domain) -> Result<FacilityPartition> {
        let mut partition = FacilityPartition::default();
        for record in SiteFilter::site_fixtures(store, domain)? {
            match record.classification() {
                Some(class) => partition.push(class, record),
                None => debug!(
                    site_id = record.site_id.as_deref().unwrap_or(""),
                    raw = record.ihf_chf.as_deref().unwrap_or(""),
                    "site fixture without a recognized IHF/CHF value, skipping"
                ),
            }
        }
        Ok(partition)
    }

    /// Site identifiers per classification.
    pub fn facility_ids(store: &dyn FixtureStore, domain: &Domain) -> Result<ClassifiedSiteIds> {
        Ok(Self::partition(store, domain)?.site_ids())
    }

    /// Site identifiers per classification, restricted to facilities whose
    /// full region→district→site chain is recorded in `site_map`.
    pub fn selected_facilities(
        store: &dyn FixtureStore,
        domain: &Domain,
        site_map: &SiteMap,
    ) -> Result<ClassifiedSiteIds> {
        let partition = Self::partition(store, domain)?;
        let selected = partition.filter_by_site_map(site_map);
        let dropped = partition
            .ihf
            .iter()
            .chain(&partition.chf)
            .filter(|f| !site_map.contains_site(&f.region_id, &f.district_id, &f.site_number))
            .count();
        if dropped > 0 {
            debug!(
                domain = %domain,
                dropped,
                "facilities outside the selected site hierarchy"
            );
        }
        Ok(selected)
    }
}
