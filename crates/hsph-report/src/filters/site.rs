//! The site selector: region → district → site drill-down.

use hsph_fixtures::FixtureStore;
use hsph_model::{Domain, SiteFixture, SiteMap};
use serde::Serialize;
use serde_json::json;

use crate::context::RenderContext;
use crate::error::Result;
use crate::request::QueryParams;

/// Fixture tag the site table is registered under.
pub const SITE_TAG: &str = "site";

/// Query-string parameter names for the three drill-down levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteSlugs {
    pub region: &'static str,
    pub district: &'static str,
    pub site: &'static str,
}

pub struct SiteFilter;

impl SiteFilter {
    pub const SLUG: &'static str = "hsph_site";
    pub const TEMPLATE: &'static str = "hsph/fields/sites.html";
    pub const SLUGS: SiteSlugs = SiteSlugs {
        region: "hsph_region",
        district: "hsph_district",
        site: "hsph_site",
    };

    /// Fetches the domain's site fixtures as typed records.
    ///
    /// An unregistered `site` tag passes `None` through to the item fetch,
    /// which fails there with `TypeNotFound`.
    pub fn site_fixtures(store: &dyn FixtureStore, domain: &Domain) -> Result<Vec<SiteFixture>> {
        let fixture_type = store.fixture_type(domain, SITE_TAG)?;
        let items = store.items(domain, fixture_type.as_ref())?;
        Ok(items
            .iter()
            .map(|item| SiteFixture::from_fields(&item.fields))
            .collect())
    }

    /// Builds the region → district → site hierarchy for the domain.
    pub fn site_map(store: &dyn FixtureStore, domain: &Domain) -> Result<SiteMap> {
        Ok(SiteMap::build(Self::site_fixtures(store, domain)?))
    }

    /// Writes the site map, current selection, and slug names into the
    /// render context consumed by the selector template.
    pub fn update_context(
        store: &dyn FixtureStore,
        domain: &Domain,
        params: &QueryParams,
        ctx: &mut RenderContext,
    ) -> Result<()> {
        let site_map = Self::site_map(store, domain)?;
        ctx.insert("sites", site_map.to_json());
        ctx.insert(
            "selected",
            json!({
                "region": params.get_or(Self::SLUGS.region, ""),
                "district": params.get_or(Self::SLUGS.district, ""),
                "siteNum": params.get_or(Self::SLUGS.site, ""),
            }),
        );
        ctx.insert("slugs", serde_json::to_value(Self::SLUGS)?);
        Ok(())
    }
}
