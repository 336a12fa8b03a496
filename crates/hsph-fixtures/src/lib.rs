//! Domain-scoped fixture reference data.
//!
//! A fixture is a small reference table (sites, DCTLs) managed outside
//! normal case data and keyed by domain plus a type tag. This crate owns the
//! store abstraction the report filters read from, an in-memory
//! implementation, and a loader that fills one from a per-domain directory
//! of CSV tables described by a `fixtures.toml` manifest.

pub mod error;
pub mod loader;
pub mod manifest;
pub mod store;
pub mod types;

pub use error::{FixtureError, Result};
pub use loader::load_domain_dir;
pub use manifest::{FixtureEntry, FixtureManifest};
pub use store::{FixtureStore, MemoryStore};
pub use types::{FixtureItem, FixtureType};
