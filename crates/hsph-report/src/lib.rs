//! Report filter fields for the HSPH health-survey reporting module.
//!
//! Every filter here is a thin adapter: it reads domain-scoped fixture
//! tables through [`hsph_fixtures::FixtureStore`], reshapes them (the site
//! hierarchy, the IHF/CHF partition), and exposes option lists and render
//! values to the templating layer. Execution is synchronous and
//! request-scoped; structures are rebuilt on every call and never cached.

pub mod context;
pub mod error;
pub mod filters;
pub mod logging;
pub mod request;

pub use context::RenderContext;
pub use error::{ReportError, Result};
pub use filters::facility::{FacilityFilter, FacilityStatusFilter};
pub use filters::ihf_chf::IhfChfFilter;
pub use filters::site::{SiteFilter, SiteSlugs};
pub use filters::status::{AllocatedToFilter, CaseStatusFilter, ReferredInStatusFilter};
pub use filters::workers::{DctlFilter, LinkedUserFilter, MobileWorkerFilter};
pub use filters::{FilterOption, ReportFilter};
pub use logging::{LogConfig, init_logging};
pub use request::QueryParams;
