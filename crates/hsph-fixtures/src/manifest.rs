#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use crate::error::{FixtureError, Result};

/// `fixtures.toml`: the list of fixture tables a domain directory carries.
///
/// ```toml
/// [[fixture]]
/// tag = "site"
/// path = "site.csv"
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FixtureManifest {
    #[serde(default)]
    pub fixture: Vec<FixtureEntry>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct FixtureEntry {
    pub tag: String,
    /// CSV path relative to the domain directory.
    pub path: String,
    /// Field names to register; defaults to the CSV header row.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

impl FixtureManifest {
    pub fn parse(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| FixtureError::io(path, e))?;
        let manifest: Self = toml::from_str(&contents).map_err(|e| FixtureError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<()> {
        let mut tags: BTreeSet<&str> = BTreeSet::new();
        for entry in &self.fixture {
            if entry.tag.trim().is_empty() {
                return Err(FixtureError::InvalidManifest {
                    message: format!("blank tag for path {}", entry.path),
                });
            }
            if !tags.insert(entry.tag.as_str()) {
                return Err(FixtureError::DuplicateTag {
                    tag: entry.tag.clone(),
                });
            }
            validate_path(&entry.path)?;
        }
        Ok(())
    }
}

fn validate_path(path: &str) -> Result<PathBuf> {
    if path.contains('\\') {
        return Err(FixtureError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must use '/' separators".to_string(),
        });
    }

    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(FixtureError::InvalidPath {
            path: p,
            message: "manifest path must be relative".to_string(),
        });
    }

    for c in p.components() {
        if matches!(c, Component::ParentDir) {
            return Err(FixtureError::InvalidPath {
                path: PathBuf::from(path),
                message: "manifest path must not traverse out of the domain directory"
                    .to_string(),
            });
        }
    }

    Ok(p)
}
