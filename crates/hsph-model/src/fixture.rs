//! Typed views over raw fixture field bags.
//!
//! Fixture items arrive as open-ended string maps. Everything downstream of
//! the store boundary works with these fixed value objects instead; a missing
//! or blank field is `None`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classification::FacilityClass;

/// One row of the `site` fixture table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteFixture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ihf_chf: Option<String>,
}

impl SiteFixture {
    /// Reads the known site fields out of a raw field bag.
    ///
    /// Unknown keys are ignored; blank values are treated as absent.
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        Self {
            region_id: field(fields, "region_id"),
            region_name: field(fields, "region_name"),
            district_id: field(fields, "district_id"),
            district_name: field(fields, "district_name"),
            site_number: field(fields, "site_number"),
            site_name: field(fields, "site_name"),
            site_id: field(fields, "site_id"),
            ihf_chf: field(fields, "ihf_chf"),
        }
    }

    /// Classification of this facility, when its `ihf_chf` value is recognized.
    pub fn classification(&self) -> Option<FacilityClass> {
        self.ihf_chf.as_deref().and_then(FacilityClass::classify)
    }
}

/// One row of the `dctl` fixture table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DctlFixture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DctlFixture {
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        Self {
            id: field(fields, "id"),
            name: field(fields, "name"),
        }
    }
}

fn field(fields: &BTreeMap<String, String>, name: &str) -> Option<String> {
    fields
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_fields_reads_known_keys() {
        let fixture = SiteFixture::from_fields(&bag(&[
            ("region_id", "R1"),
            ("region_name", "North"),
            ("site_id", " S1 "),
            ("unrelated", "x"),
        ]));
        assert_eq!(fixture.region_id.as_deref(), Some("R1"));
        assert_eq!(fixture.region_name.as_deref(), Some("North"));
        assert_eq!(fixture.site_id.as_deref(), Some("S1"));
        assert_eq!(fixture.district_id, None);
    }

    #[test]
    fn blank_values_are_absent() {
        let fixture = SiteFixture::from_fields(&bag(&[("region_id", "  "), ("ihf_chf", "")]));
        assert_eq!(fixture.region_id, None);
        assert_eq!(fixture.ihf_chf, None);
        assert_eq!(fixture.classification(), None);
    }

    #[test]
    fn dctl_from_fields() {
        let dctl = DctlFixture::from_fields(&bag(&[("id", "D-1"), ("name", "Some DCTL")]));
        assert_eq!(dctl.id.as_deref(), Some("D-1"));
        assert_eq!(dctl.name.as_deref(), Some("Some DCTL"));
    }
}
