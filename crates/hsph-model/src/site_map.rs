//! The region → district → site hierarchy.
//!
//! Built fresh from the flat `site` fixture table on every request and
//! discarded afterwards. Identifier keys are `Option<String>`: a record with
//! a missing identifier files under the absent key, which is a legitimate
//! lookup key rather than an error.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::fixture::SiteFixture;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteMap {
    regions: BTreeMap<Option<String>, RegionEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionEntry {
    pub name: Option<String>,
    pub districts: BTreeMap<Option<String>, DistrictEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistrictEntry {
    pub name: Option<String>,
    pub sites: BTreeMap<Option<String>, SiteEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteEntry {
    pub name: Option<String>,
}

impl SiteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a sequence of site fixtures into a hierarchy.
    ///
    /// Idempotent under duplicates: processing the same record twice neither
    /// creates duplicate entries nor alters already-stored names.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SiteFixture>,
    {
        let mut map = Self::new();
        for record in records {
            map.insert(&record);
        }
        map
    }

    /// Records one fixture's region/district/site chain.
    ///
    /// First-seen display names win; existing entries are never overwritten.
    pub fn insert(&mut self, record: &SiteFixture) {
        let region = self
            .regions
            .entry(record.region_id.clone())
            .or_insert_with(|| RegionEntry {
                name: record.region_name.clone(),
                districts: BTreeMap::new(),
            });
        let district = region
            .districts
            .entry(record.district_id.clone())
            .or_insert_with(|| DistrictEntry {
                name: record.district_name.clone(),
                sites: BTreeMap::new(),
            });
        district
            .sites
            .entry(record.site_number.clone())
            .or_insert_with(|| SiteEntry {
                name: record.site_name.clone(),
            });
    }

    /// Strict full-chain membership: all three levels must be present.
    ///
    /// A region+district match with an unrecorded site number is a miss.
    pub fn contains_site(
        &self,
        region_id: &Option<String>,
        district_id: &Option<String>,
        site_number: &Option<String>,
    ) -> bool {
        self.regions
            .get(region_id)
            .and_then(|region| region.districts.get(district_id))
            .is_some_and(|district| district.sites.contains_key(site_number))
    }

    pub fn region(&self, region_id: &Option<String>) -> Option<&RegionEntry> {
        self.regions.get(region_id)
    }

    pub fn regions(&self) -> &BTreeMap<Option<String>, RegionEntry> {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Renders the hierarchy for the templating layer.
    ///
    /// Absent identifier keys serialize as the string `"null"`; absent names
    /// serialize as JSON null.
    pub fn to_json(&self) -> Value {
        let mut regions = serde_json::Map::new();
        for (region_id, region) in &self.regions {
            let mut districts = serde_json::Map::new();
            for (district_id, district) in &region.districts {
                let mut sites = serde_json::Map::new();
                for (site_number, site) in &district.sites {
                    sites.insert(
                        json_key(site_number),
                        serde_json::json!({ "name": site.name }),
                    );
                }
                districts.insert(
                    json_key(district_id),
                    serde_json::json!({ "name": district.name, "sites": sites }),
                );
            }
            regions.insert(
                json_key(region_id),
                serde_json::json!({ "name": region.name, "districts": districts }),
            );
        }
        Value::Object(regions)
    }
}

fn json_key(key: &Option<String>) -> String {
    match key {
        Some(id) => id.clone(),
        None => "null".to_string(),
    }
}
