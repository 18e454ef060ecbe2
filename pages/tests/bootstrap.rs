use hearth::{config::CONFIG_ISLAND, Bootstrap, MemoryHost, MountOutcome, Page};
use hearth_pages::{
    bootstrap::{composition, BULMA_STYLESHEET},
    dashboard, home, inbox, listings,
};

const DEV_CONFIG: &str = r#"{ "environment": "development" }"#;

/// Every island any page reads, so that each page renders its content.
fn with_islands(host: MemoryHost) -> MemoryHost {
    host.with_island(home::FEATURED_ISLAND, "[]")
        .with_island(listings::LISTINGS_ISLAND, "[]")
        .with_island(inbox::INBOX_ISLAND, "[]")
        .with_island(dashboard::DASHBOARD_ISLAND, "[]")
}

fn assert_mounts_once<P: Page>(bootstrap: Bootstrap<P>, config: Option<&str>) {
    let anchor = bootstrap.anchor();
    let mut host = with_islands(MemoryHost::new().with_anchor(anchor));
    if let Some(config) = config {
        host = host.with_island(CONFIG_ISLAND, config);
    }

    let outcome = bootstrap.launch(&mut host, composition).unwrap();

    assert_eq!(outcome, MountOutcome::Mounted, "{anchor}");
    assert_eq!(host.renders().len(), 1, "{anchor}");
    assert_eq!(host.renders()[0].0, anchor);
    assert!(host.stylesheets().iter().any(|s| s == BULMA_STYLESHEET));
    assert!(
        host.view(anchor)
            .unwrap()
            .find_by_class("error-fallback")
            .is_none(),
        "{anchor} fell back"
    );
}

fn assert_skips_without_anchor<P: Page>(bootstrap: Bootstrap<P>) {
    let anchor = bootstrap.anchor();
    let mut host = with_islands(MemoryHost::new().with_anchor("some-other-root"));

    let outcome = bootstrap.launch(&mut host, composition).unwrap();

    assert_eq!(outcome, MountOutcome::AnchorMissing, "{anchor}");
    assert!(host.renders().is_empty(), "{anchor}");
}

#[test]
fn test_every_page_mounts_exactly_once() {
    assert_mounts_once(home::bootstrap(), None);
    assert_mounts_once(listings::bootstrap(), None);
    assert_mounts_once(inbox::bootstrap(), None);
    assert_mounts_once(dashboard::bootstrap(), None);
}

#[test]
fn test_every_page_mounts_once_in_development() {
    assert_mounts_once(home::bootstrap(), Some(DEV_CONFIG));
    assert_mounts_once(listings::bootstrap(), Some(DEV_CONFIG));
    assert_mounts_once(inbox::bootstrap(), Some(DEV_CONFIG));
    assert_mounts_once(dashboard::bootstrap(), Some(DEV_CONFIG));
}

#[test]
fn test_every_page_skips_a_missing_anchor() {
    assert_skips_without_anchor(home::bootstrap());
    assert_skips_without_anchor(listings::bootstrap());
    assert_skips_without_anchor(inbox::bootstrap());
    assert_skips_without_anchor(dashboard::bootstrap());
}
