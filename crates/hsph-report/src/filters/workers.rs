//! Mobile-worker selectors.
//!
//! The role filters are pure configuration handed to the web layer's
//! worker-selection machinery; only the DCTL list is fixture-backed.

use hsph_fixtures::FixtureStore;
use hsph_model::{DctlFixture, Domain};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::filters::{FilterOption, ReportFilter};

/// Fixture tag the DCTL table is registered under.
pub const DCTL_TAG: &str = "dctl";

/// Selector for mobile workers in a named role group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileWorkerFilter {
    pub slug: &'static str,
    pub label: &'static str,
    pub css_id: &'static str,
    pub group_names: &'static [&'static str],
    pub default_option: Option<&'static str>,
    pub show_only_group_option: bool,
}

impl MobileWorkerFilter {
    pub const fn fada() -> Self {
        Self {
            slug: "fada_name",
            label: "Name of FADA",
            css_id: "fada_name",
            group_names: &["Role - FADA"],
            default_option: Some("All FADAs"),
            show_only_group_option: false,
        }
    }

    pub const fn fida() -> Self {
        Self {
            slug: "fida_name",
            label: "Name of FIDA",
            css_id: "fida_name",
            group_names: &["Role - FIDA"],
            default_option: Some("All FIDAs"),
            show_only_group_option: false,
        }
    }

    pub const fn cati() -> Self {
        Self {
            slug: "cati_name",
            label: "Name of CATI",
            css_id: "cati_name",
            group_names: &["Role - CATI"],
            default_option: Some("All CATIs"),
            show_only_group_option: false,
        }
    }

    pub const fn cati_tl() -> Self {
        Self {
            slug: "cati_tl_name",
            label: "Name of CATI TL",
            css_id: "cati_tl_name",
            group_names: &["Role - CATI TL"],
            default_option: Some("All CATI TLs"),
            show_only_group_option: false,
        }
    }

    pub const fn citl() -> Self {
        Self {
            slug: "citl_name",
            label: "Name of CITL",
            css_id: "citl_name",
            group_names: &["CITL"],
            default_option: None,
            show_only_group_option: false,
        }
    }
}

/// Pairs two worker roles so selecting the first narrows the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkedUserFilter {
    pub user_types: (&'static str, &'static str),
}

impl LinkedUserFilter {
    pub const fn dctl_to_fida() -> Self {
        Self {
            user_types: ("DCTL", "FIDA"),
        }
    }
}

/// Selector for DCTLs, listed from the `dctl` fixture table.
pub struct DctlFilter;

impl ReportFilter for DctlFilter {
    fn slug(&self) -> &'static str {
        "dctl_name"
    }

    fn label(&self) -> &'static str {
        "Name of DCTL"
    }

    fn default_text(&self) -> &'static str {
        "All DCTLs..."
    }

    fn options(&self, store: &dyn FixtureStore, domain: &Domain) -> Result<Vec<FilterOption>> {
        let fixture_type = store.fixture_type(domain, DCTL_TAG)?;
        let items = store.items(domain, fixture_type.as_ref())?;

        let mut options = Vec::new();
        for item in &items {
            let dctl = DctlFixture::from_fields(&item.fields);
            match (dctl.id, dctl.name) {
                (Some(id), Some(name)) => options.push(FilterOption::new(id, name)),
                (id, _) => debug!(
                    id = id.as_deref().unwrap_or(""),
                    "dctl fixture missing id or name, skipping"
                ),
            }
        }
        Ok(options)
    }
}
