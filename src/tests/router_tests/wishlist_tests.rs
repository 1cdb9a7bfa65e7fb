use crate::db::ProductStore;
use crate::router::handle;
use crate::tests::utils::{body_string, get, location, post_form, sign_in, test_app, TEST_IMAGE};

fn publish(app: &crate::app::App, cookie: &str, name: &str) -> i64 {
    handle(
        post_form(
            "/add",
            &[
                ("name", name),
                ("price", "12.5"),
                ("original_price", "20"),
                ("description", "Barely used"),
                ("location", "Worcester, MA"),
                ("image", TEST_IMAGE),
            ],
            Some(cookie),
        ),
        app,
    )
    .unwrap();
    app.db
        .select_all()
        .unwrap()
        .into_iter()
        .find(|l| l.name == name)
        .map(|l| l.id)
        .unwrap()
}

#[test]
fn toggle_twice_restores_profile_wishlist() {
    let (_dir, app) = test_app();
    let seller = sign_in(&app, "seller@clarku.edu");
    let buyer = sign_in(&app, "buyer@clarku.edu");
    let id = publish(&app, &seller, "Mini Fridge");
    let toggle = format!("/wishlist/{id}/toggle");

    let resp = handle(post_form(&toggle, &[], Some(&buyer)), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), format!("/product/{id}"));

    let product = body_string(handle(get(&format!("/product/{id}"), Some(&buyer)), &app).unwrap());
    assert!(product.contains("♥ Saved"));

    let profile = body_string(handle(get("/profile", Some(&buyer)), &app).unwrap());
    assert!(profile.contains("Wishlist (1)"));
    assert!(profile.contains("Mini Fridge"));
    assert!(profile.contains("-38%"));

    handle(post_form(&toggle, &[], Some(&buyer)), &app).unwrap();
    let profile = body_string(handle(get("/profile", Some(&buyer)), &app).unwrap());
    assert!(profile.contains("Wishlist (0)"));
}

#[test]
fn wishlists_are_per_user() {
    let (_dir, app) = test_app();
    let seller = sign_in(&app, "seller@clarku.edu");
    let alice = sign_in(&app, "alice@clarku.edu");
    let bob = sign_in(&app, "bob@clarku.edu");
    let id = publish(&app, &seller, "Bike");

    handle(post_form(&format!("/wishlist/{id}/toggle"), &[], Some(&alice)), &app).unwrap();

    let bob_profile = body_string(handle(get("/profile", Some(&bob)), &app).unwrap());
    assert!(bob_profile.contains("Wishlist (0)"));
}

#[test]
fn remove_from_profile_and_reconcile_deleted_listing() {
    let (_dir, app) = test_app();
    let seller = sign_in(&app, "seller@clarku.edu");
    let buyer = sign_in(&app, "buyer@clarku.edu");
    let keep = publish(&app, &seller, "Helmet");
    let gone = publish(&app, &seller, "Lock");

    for id in [keep, gone] {
        handle(post_form(&format!("/wishlist/{id}/toggle"), &[], Some(&buyer)), &app).unwrap();
    }

    handle(
        post_form(&format!("/edit/{gone}/delete"), &[("confirmed", "true")], Some(&seller)),
        &app,
    )
    .unwrap();
    let profile = body_string(handle(get("/profile", Some(&buyer)), &app).unwrap());
    assert!(profile.contains("Wishlist (1)"));
    assert!(!profile.contains("Lock"));

    let resp = handle(post_form(&format!("/wishlist/{keep}/remove"), &[], Some(&buyer)), &app).unwrap();
    assert_eq!(location(&resp), "/profile");
    let profile = body_string(handle(get("/profile", Some(&buyer)), &app).unwrap());
    assert!(profile.contains("Wishlist (0)"));
}

#[test]
fn toggle_requires_sign_in() {
    let (_dir, app) = test_app();
    let resp = handle(post_form("/wishlist/1/toggle", &[], None), &app).unwrap();
    assert_eq!(location(&resp), "/signin");
}
