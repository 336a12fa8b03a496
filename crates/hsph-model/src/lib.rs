pub mod classification;
pub mod error;
pub mod fixture;
pub mod ids;
pub mod partition;
pub mod site_map;

pub use classification::FacilityClass;
pub use error::ModelError;
pub use fixture::{DctlFixture, SiteFixture};
pub use ids::Domain;
pub use partition::{ClassifiedSiteIds, FacilityPartition};
pub use site_map::{DistrictEntry, RegionEntry, SiteEntry, SiteMap};
