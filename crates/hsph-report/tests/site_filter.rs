use hsph_fixtures::{FixtureError, FixtureItem, MemoryStore};
use hsph_model::Domain;
use hsph_report::{
    AllocatedToFilter, CaseStatusFilter, IhfChfFilter, LinkedUserFilter, MobileWorkerFilter,
    QueryParams, RenderContext, ReportError, ReportFilter, SiteFilter,
};
use serde_json::json;

fn store_with_one_site() -> (MemoryStore, Domain) {
    let domain = Domain::new("hsph").unwrap();
    let mut store = MemoryStore::new();
    let fixture_type = store.register(
        &domain,
        "site",
        vec![
            "region_id".to_string(),
            "region_name".to_string(),
            "district_id".to_string(),
            "district_name".to_string(),
            "site_number".to_string(),
            "site_name".to_string(),
            "site_id".to_string(),
            "ihf_chf".to_string(),
        ],
    );
    store.push_item(FixtureItem::new(
        &fixture_type,
        [
            ("region_id", "R1"),
            ("region_name", "North"),
            ("district_id", "D1"),
            ("district_name", "A"),
            ("site_number", "1"),
            ("site_name", "Alpha"),
            ("site_id", "S1"),
            ("ihf_chf", "IHF"),
        ],
    ));
    (store, domain)
}

#[test]
fn update_context_writes_sites_selection_and_slugs() {
    let (store, domain) = store_with_one_site();
    let params = QueryParams::from_pairs([("hsph_region", "R1"), ("hsph_site", "1")]);
    let mut ctx = RenderContext::new();

    SiteFilter::update_context(&store, &domain, &params, &mut ctx).unwrap();

    assert_eq!(
        ctx.get("sites"),
        Some(&json!({
            "R1": {
                "name": "North",
                "districts": {
                    "D1": {
                        "name": "A",
                        "sites": { "1": { "name": "Alpha" } }
                    }
                }
            }
        }))
    );
    assert_eq!(
        ctx.get("selected"),
        Some(&json!({ "region": "R1", "district": "", "siteNum": "1" }))
    );
    assert_eq!(
        ctx.get("slugs"),
        Some(&json!({
            "region": "hsph_region",
            "district": "hsph_district",
            "site": "hsph_site",
        }))
    );
}

#[test]
fn missing_site_fixture_type_fails_at_the_item_fetch() {
    let domain = Domain::new("hsph").unwrap();
    let store = MemoryStore::new();

    let err = SiteFilter::site_map(&store, &domain).unwrap_err();
    assert!(matches!(
        err,
        ReportError::Fixture(FixtureError::TypeNotFound { .. })
    ));
}

#[test]
fn site_map_rebuilds_from_scratch_on_every_call() {
    let (store, domain) = store_with_one_site();
    let first = SiteFilter::site_map(&store, &domain).unwrap();
    let second = SiteFilter::site_map(&store, &domain).unwrap();
    assert_eq!(first, second);
}

#[test]
fn filter_metadata_matches_the_report_ui() {
    let ihf_chf = IhfChfFilter;
    assert_eq!(ihf_chf.slug(), "ihf_or_chf");
    assert_eq!(ihf_chf.label(), "IHF/CHF");
    assert_eq!(ihf_chf.default_text(), "IHF and CHF");

    let case_status = CaseStatusFilter;
    assert_eq!(case_status.slug(), "case_status");
    assert_eq!(case_status.label(), "Home Visit Status");

    let allocated = AllocatedToFilter;
    assert_eq!(allocated.default_text(), "All");

    assert_eq!(SiteFilter::SLUG, "hsph_site");
    assert_eq!(SiteFilter::TEMPLATE, "hsph/fields/sites.html");
}

#[test]
fn worker_filters_carry_their_role_groups() {
    assert_eq!(MobileWorkerFilter::fada().group_names, ["Role - FADA"]);
    assert_eq!(MobileWorkerFilter::fida().default_option, Some("All FIDAs"));
    assert_eq!(MobileWorkerFilter::cati_tl().slug, "cati_tl_name");
    assert_eq!(MobileWorkerFilter::citl().group_names, ["CITL"]);
    assert_eq!(MobileWorkerFilter::citl().default_option, None);
    assert_eq!(
        LinkedUserFilter::dctl_to_fida().user_types,
        ("DCTL", "FIDA")
    );
}
