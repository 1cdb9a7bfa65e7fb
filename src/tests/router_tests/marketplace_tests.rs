use crate::catalog::cache::CatalogCache;
use crate::db::ProductStore;
use crate::domain::{Condition, NewListing};
use crate::local_store::FileStore;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, TEST_IMAGE};
use chrono::Utc;

fn new_listing(name: &str, tags: &str) -> NewListing {
    NewListing {
        name: name.into(),
        description: "Solid and clean".into(),
        price: 40.0,
        original_price: None,
        location: "Worcester, MA".into(),
        condition: Condition::Good,
        phone: None,
        tags: tags.into(),
        image: TEST_IMAGE.into(),
        listed_date: Utc::now(),
        owner: "seller@clarku.edu".into(),
    }
}

#[test]
fn first_paint_without_cache_asks_for_refresh() {
    let (_dir, app) = test_app();
    let resp = handle(get("/marketplace", None), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Loading products"));
    assert!(body.contains(r#"hx-get="/marketplace/refresh""#));
}

#[test]
fn refresh_fetches_fresh_and_persists_the_snapshot() {
    let (dir, app) = test_app();
    app.db.insert(&new_listing("Red Chair", "Furniture")).unwrap();
    app.db.insert(&new_listing("Blue Chair", "Home")).unwrap();

    let body = body_string(handle(get("/marketplace/refresh", None), &app).unwrap());
    assert!(body.contains("Red Chair"));
    assert!(body.contains("Blue Chair"));
    assert!(!body.contains("hx-trigger"));

    let cached = CatalogCache::new(FileStore::new(dir.path().join("data"))).load();
    assert_eq!(cached, app.db.select_all().unwrap());
}

#[test]
fn results_filter_the_cached_snapshot_only() {
    let (_dir, app) = test_app();
    app.db.insert(&new_listing("Red Chair", "Furniture")).unwrap();
    app.db.insert(&new_listing("Blue Chair", "Home")).unwrap();
    handle(get("/marketplace/refresh", None), &app).unwrap();

    let body = body_string(handle(get("/marketplace/results?q=chair&tag=ALL", None), &app).unwrap());
    assert!(body.contains("Red Chair") && body.contains("Blue Chair"));

    let body =
        body_string(handle(get("/marketplace/results?q=chair&tag=Furniture", None), &app).unwrap());
    assert!(body.contains("Red Chair"));
    assert!(!body.contains("Blue Chair"));

    // not in the snapshot until the next refresh
    app.db.insert(&new_listing("Green Chair", "Home")).unwrap();
    let body = body_string(handle(get("/marketplace/results?q=green", None), &app).unwrap());
    assert!(body.contains("No products found"));

    let body = body_string(handle(get("/marketplace/refresh?q=green", None), &app).unwrap());
    assert!(body.contains("Green Chair"));
}

#[test]
fn cached_page_paints_snapshot_before_refresh() {
    let (_dir, app) = test_app();
    app.db.insert(&new_listing("Kettle", "Home")).unwrap();
    handle(get("/marketplace/refresh", None), &app).unwrap();

    let body = body_string(handle(get("/marketplace?q=kett", None), &app).unwrap());
    assert!(body.contains("Kettle"));
    assert!(body.contains(r#"value="kett""#));
    assert!(body.contains("check for updates"));
}

#[test]
fn empty_catalog_snapshot_filters_without_refetching() {
    let (_dir, app) = test_app();
    handle(get("/marketplace/refresh", None), &app).unwrap();

    let body = body_string(handle(get("/marketplace/results?q=lamp", None), &app).unwrap());
    assert!(body.contains("No products found"));
    assert!(!body.contains(r#"hx-get="/marketplace/refresh""#));
    assert!(!body.contains("Loading products"));
}
