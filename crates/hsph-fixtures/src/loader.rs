#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use hsph_model::Domain;

use crate::error::{FixtureError, Result};
use crate::manifest::FixtureManifest;
use crate::store::MemoryStore;
use crate::types::FixtureItem;

/// Loads `<root>/<domain>/fixtures.toml` and every CSV table it lists into
/// an in-memory store.
///
/// The CSV header row supplies the field names unless the manifest entry
/// pins them. Cells are trimmed; blank cells are omitted from the field bag.
pub fn load_domain_dir(root: &Path, domain: &Domain) -> Result<MemoryStore> {
    let dir = root.join(domain.as_str());
    let manifest = FixtureManifest::parse(&dir.join("fixtures.toml"))?;

    let mut store = MemoryStore::new();
    for entry in &manifest.fixture {
        let path = dir.join(&entry.path);
        let (headers, rows) = parse_fixture_csv(&path)?;
        let fields = entry.fields.clone().unwrap_or(headers);

        let fixture_type = store.register(domain, &entry.tag, fields);
        let row_count = rows.len();
        for fields in rows {
            store.push_item(FixtureItem {
                type_id: fixture_type.id.clone(),
                fields,
            });
        }
        tracing::info!(domain = %domain, tag = %entry.tag, rows = row_count, "loaded fixture table");
    }
    Ok(store)
}

type Rows = Vec<BTreeMap<String, String>>;

fn parse_fixture_csv(path: &Path) -> Result<(Vec<String>, Rows)> {
    let bytes = std::fs::read(path).map_err(|e| FixtureError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| FixtureError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| FixtureError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut fields = BTreeMap::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            let value = cell.trim();
            if !value.is_empty() {
                fields.insert(header.clone(), value.to_string());
            }
        }
        rows.push(fields);
    }

    Ok((headers, rows))
}
