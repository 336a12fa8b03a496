use std::path::Path;

use hsph_fixtures::{FixtureError, FixtureStore, load_domain_dir};
use hsph_model::Domain;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[[fixture]]
tag = "site"
path = "site.csv"

[[fixture]]
tag = "dctl"
path = "dctl.csv"
"#;

const SITE_CSV: &str = "\
region_id,region_name,district_id,district_name,site_number,site_name,site_id,ihf_chf
R1,North,D1,A,1,Alpha,S1,IHF
R1,North,D1,A,2,Beta,S2,
";

const DCTL_CSV: &str = "\
id,name
D-1,First DCTL
";

fn write_domain_dir(root: &Path, domain: &str) {
    let dir = root.join(domain);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("fixtures.toml"), MANIFEST).unwrap();
    std::fs::write(dir.join("site.csv"), SITE_CSV).unwrap();
    std::fs::write(dir.join("dctl.csv"), DCTL_CSV).unwrap();
}

#[test]
fn loads_every_listed_table() {
    let tmp = TempDir::new().unwrap();
    let domain = Domain::new("hsph").unwrap();
    write_domain_dir(tmp.path(), "hsph");

    let store = load_domain_dir(tmp.path(), &domain).unwrap();

    let site_type = store.fixture_type(&domain, "site").unwrap().unwrap();
    assert_eq!(site_type.id, "hsph/site");
    assert_eq!(site_type.fields.len(), 8);

    let sites = store.items(&domain, Some(&site_type)).unwrap();
    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].field("site_name"), Some("Alpha"));

    let dctl_type = store.fixture_type(&domain, "dctl").unwrap().unwrap();
    let dctls = store.items(&domain, Some(&dctl_type)).unwrap();
    assert_eq!(dctls.len(), 1);
    assert_eq!(dctls[0].field("name"), Some("First DCTL"));
}

#[test]
fn blank_cells_are_omitted_from_the_field_bag() {
    let tmp = TempDir::new().unwrap();
    let domain = Domain::new("hsph").unwrap();
    write_domain_dir(tmp.path(), "hsph");

    let store = load_domain_dir(tmp.path(), &domain).unwrap();
    let site_type = store.fixture_type(&domain, "site").unwrap();
    let sites = store.items(&domain, site_type.as_ref()).unwrap();

    // Second row has no ihf_chf value.
    assert_eq!(sites[1].field("site_id"), Some("S2"));
    assert_eq!(sites[1].field("ihf_chf"), None);
}

#[test]
fn missing_manifest_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let domain = Domain::new("hsph").unwrap();

    let err = load_domain_dir(tmp.path(), &domain).unwrap_err();
    assert!(matches!(err, FixtureError::Io { .. }));
}

#[test]
fn duplicate_tags_are_rejected_before_any_csv_is_read() {
    let tmp = TempDir::new().unwrap();
    let domain = Domain::new("hsph").unwrap();
    let dir = tmp.path().join("hsph");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("fixtures.toml"),
        "[[fixture]]\ntag = \"site\"\npath = \"a.csv\"\n\n[[fixture]]\ntag = \"site\"\npath = \"b.csv\"\n",
    )
    .unwrap();

    let err = load_domain_dir(tmp.path(), &domain).unwrap_err();
    assert!(matches!(err, FixtureError::DuplicateTag { .. }));
}

#[test]
fn manifest_fields_override_the_header_row() {
    let tmp = TempDir::new().unwrap();
    let domain = Domain::new("hsph").unwrap();
    let dir = tmp.path().join("hsph");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("fixtures.toml"),
        "[[fixture]]\ntag = \"dctl\"\npath = \"dctl.csv\"\nfields = [\"id\", \"name\"]\n",
    )
    .unwrap();
    std::fs::write(dir.join("dctl.csv"), DCTL_CSV).unwrap();

    let store = load_domain_dir(tmp.path(), &domain).unwrap();
    let dctl_type = store.fixture_type(&domain, "dctl").unwrap().unwrap();
    assert_eq!(dctl_type.fields, vec!["id".to_string(), "name".to_string()]);
}
