//! Partition of the facility list into IHF and CHF buckets.

use serde::Serialize;

use crate::classification::FacilityClass;
use crate::fixture::SiteFixture;
use crate::site_map::SiteMap;

/// Facilities grouped by recognized classification.
///
/// Records without a recognized `ihf_chf` value belong to neither bucket;
/// every facility lands in at most one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacilityPartition {
    pub ihf: Vec<SiteFixture>,
    pub chf: Vec<SiteFixture>,
}

impl FacilityPartition {
    /// Classifies and buckets a sequence of records, dropping the
    /// unclassifiable ones. Callers that need to observe drops should
    /// classify record-by-record and use [`FacilityPartition::push`].
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SiteFixture>,
    {
        let mut partition = Self::default();
        for record in records {
            if let Some(class) = record.classification() {
                partition.push(class, record);
            }
        }
        partition
    }

    pub fn push(&mut self, class: FacilityClass, record: SiteFixture) {
        match class {
            FacilityClass::Ihf => self.ihf.push(record),
            FacilityClass::Chf => self.chf.push(record),
        }
    }

    pub fn bucket(&self, class: FacilityClass) -> &[SiteFixture] {
        match class {
            FacilityClass::Ihf => &self.ihf,
            FacilityClass::Chf => &self.chf,
        }
    }

    pub fn len(&self) -> usize {
        self.ihf.len() + self.chf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ihf.is_empty() && self.chf.is_empty()
    }

    /// Projects each bucket to its facilities' site identifiers.
    ///
    /// Records without a `site_id` are skipped; the identifier is what
    /// downstream query constraints consume.
    pub fn site_ids(&self) -> ClassifiedSiteIds {
        ClassifiedSiteIds {
            ihf: project_site_ids(&self.ihf),
            chf: project_site_ids(&self.chf),
        }
    }

    /// Site identifiers of facilities whose full region→district→site chain
    /// is recorded in `site_map`.
    ///
    /// Strict full-chain match: a facility whose region and district are in
    /// the map but whose site number is not gets dropped.
    pub fn filter_by_site_map(&self, site_map: &SiteMap) -> ClassifiedSiteIds {
        ClassifiedSiteIds {
            ihf: filter_bucket(&self.ihf, site_map),
            chf: filter_bucket(&self.chf, site_map),
        }
    }
}

/// Site identifiers grouped by classification, ready for the render context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedSiteIds {
    pub ihf: Vec<String>,
    pub chf: Vec<String>,
}

impl ClassifiedSiteIds {
    pub fn bucket(&self, class: FacilityClass) -> &[String] {
        match class {
            FacilityClass::Ihf => &self.ihf,
            FacilityClass::Chf => &self.chf,
        }
    }
}

fn project_site_ids(records: &[SiteFixture]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.site_id.clone())
        .collect()
}

fn filter_bucket(records: &[SiteFixture], site_map: &SiteMap) -> Vec<String> {
    records
        .iter()
        .filter(|record| {
            site_map.contains_site(&record.region_id, &record.district_id, &record.site_number)
        })
        .filter_map(|record| record.site_id.clone())
        .collect()
}
