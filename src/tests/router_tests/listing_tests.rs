use crate::db::ProductStore;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, location, post_form, sign_in, test_app, TEST_IMAGE};
use chrono::{Duration, Utc};

fn desk_lamp_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Desk Lamp"),
        ("price", "25"),
        ("description", "Works great"),
        ("location", "Worcester, MA"),
        ("image", TEST_IMAGE),
    ]
}

#[test]
fn add_listing_stamps_owner_and_date() {
    let (_dir, app) = test_app();
    let cookie = sign_in(&app, "Seller@ClarkU.edu");
    let before = Utc::now();

    let resp = handle(post_form("/add", &desk_lamp_fields(), Some(&cookie)), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Listing published!"));
    // the form is cleared after success
    assert!(!body.contains(r#"value="Desk Lamp""#));

    let all = app.db.select_all().unwrap();
    assert_eq!(all.len(), 1);
    let lamp = &all[0];
    assert_eq!(lamp.price, 25.0);
    assert_eq!(lamp.original_price, None);
    assert_eq!(lamp.tags, "");
    assert_eq!(lamp.condition, crate::domain::Condition::New);
    assert_eq!(lamp.owner, "seller@clarku.edu");
    assert_eq!(lamp.image, TEST_IMAGE);
    assert!(lamp.listed_date >= before - Duration::seconds(1));
    assert!(lamp.listed_date <= Utc::now() + Duration::seconds(1));
}

#[test]
fn invalid_add_keeps_the_form_populated() {
    let (_dir, app) = test_app();
    let cookie = sign_in(&app, "seller@clarku.edu");

    let resp = handle(
        post_form("/add", &[("name", "Desk Lamp"), ("price", "-3")], Some(&cookie)),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains(r#"value="Desk Lamp""#));
    assert!(body.contains("Price must be greater than 0"));
    assert!(body.contains("Product image is required"));
    assert!(app.db.select_all().unwrap().is_empty());
}

fn create_as(app: &crate::app::App, cookie: &str) -> i64 {
    handle(post_form("/add", &desk_lamp_fields(), Some(cookie)), app).unwrap();
    app.db.select_all().unwrap().last().map(|l| l.id).unwrap()
}

#[test]
fn owner_edits_and_keeps_image_when_none_uploaded() {
    let (_dir, app) = test_app();
    let cookie = sign_in(&app, "seller@clarku.edu");
    let id = create_as(&app, &cookie);

    let body = body_string(handle(get(&format!("/edit/{id}"), Some(&cookie)), &app).unwrap());
    assert!(body.contains(r#"value="Desk Lamp""#));

    let resp = handle(
        post_form(
            &format!("/edit/{id}"),
            &[
                ("name", "Desk Lamp"),
                ("price", "20"),
                ("original_price", "30"),
                ("description", "Works great"),
                ("location", "Worcester, MA"),
                ("condition", "Like New"),
                ("tags", "Home"),
                ("image", ""),
            ],
            Some(&cookie),
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/profile");

    let lamp = app.db.select_by_id(id).unwrap().unwrap();
    assert_eq!(lamp.price, 20.0);
    assert_eq!(lamp.original_price, Some(30.0));
    assert_eq!(lamp.tags, "Home");
    assert_eq!(lamp.image, TEST_IMAGE);
}

#[test]
fn non_owner_cannot_edit_or_delete() {
    let (_dir, app) = test_app();
    let owner = sign_in(&app, "seller@clarku.edu");
    let intruder = sign_in(&app, "intruder@clarku.edu");
    let id = create_as(&app, &owner);

    match handle(get(&format!("/edit/{id}"), Some(&intruder)), &app) {
        Err(ServerError::Forbidden(_)) => {}
        other => panic!("expected Forbidden, got {:?}", other.map(|r| r.status())),
    }

    let mut fields = desk_lamp_fields();
    fields[1] = ("price", "1");
    match handle(post_form(&format!("/edit/{id}"), &fields, Some(&intruder)), &app) {
        Err(ServerError::Forbidden(_)) => {}
        other => panic!("expected Forbidden, got {:?}", other.map(|r| r.status())),
    }

    match handle(
        post_form(&format!("/edit/{id}/delete"), &[("confirmed", "true")], Some(&intruder)),
        &app,
    ) {
        Err(ServerError::Forbidden(_)) => {}
        other => panic!("expected Forbidden, got {:?}", other.map(|r| r.status())),
    }
    assert_eq!(app.db.select_by_id(id).unwrap().unwrap().price, 25.0);
}

#[test]
fn delete_requires_confirmation() {
    let (_dir, app) = test_app();
    let cookie = sign_in(&app, "seller@clarku.edu");
    let id = create_as(&app, &cookie);
    let uri = format!("/edit/{id}/delete");

    let resp = handle(post_form(&uri, &[], Some(&cookie)), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(r#"name="confirmed" value="true""#));
    assert!(app.db.select_by_id(id).unwrap().is_some());

    let resp = handle(post_form(&uri, &[("confirmed", "true")], Some(&cookie)), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/profile");
    assert!(app.db.select_by_id(id).unwrap().is_none());
}

#[test]
fn product_page_shows_listing_and_404s_when_missing() {
    let (_dir, app) = test_app();
    let cookie = sign_in(&app, "seller@clarku.edu");
    let id = create_as(&app, &cookie);

    let body = body_string(handle(get(&format!("/product/{id}"), None), &app).unwrap());
    assert!(body.contains("Desk Lamp"));
    assert!(body.contains("Works great"));
    assert!(body.contains("to=seller%40clarku.edu"));

    assert!(matches!(
        handle(get("/product/9999", None), &app),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/product/not-a-number", None), &app),
        Err(ServerError::NotFound)
    ));
}

fn break_product_table(app: &crate::app::App) {
    app.db
        .with_conn(|conn| Ok(conn.execute_batch("drop table products")?))
        .unwrap();
}

#[test]
fn add_store_failure_shows_raw_message_and_keeps_input() {
    let (_dir, app) = test_app();
    let cookie = sign_in(&app, "seller@clarku.edu");
    break_product_table(&app);

    let resp = handle(post_form("/add", &desk_lamp_fields(), Some(&cookie)), &app).unwrap();
    assert_eq!(resp.status(), 500);

    let body = body_string(resp);
    assert!(body.contains("no such table: products"));
    assert!(body.contains(r#"value="Desk Lamp""#));
    assert!(body.contains(r#"value="Worcester, MA""#));
    assert!(!body.contains("Listing published!"));
}

#[test]
fn edit_store_failure_shows_raw_message_and_keeps_input() {
    let (_dir, app) = test_app();
    let cookie = sign_in(&app, "seller@clarku.edu");
    let id = create_as(&app, &cookie);
    break_product_table(&app);

    let mut fields = desk_lamp_fields();
    fields[0] = ("name", "Desk Lamp v2");
    let resp = handle(post_form(&format!("/edit/{id}"), &fields, Some(&cookie)), &app).unwrap();
    assert_eq!(resp.status(), 500);

    let body = body_string(resp);
    assert!(body.contains("no such table: products"));
    assert!(body.contains(r#"value="Desk Lamp v2""#));
    assert!(body.contains(&format!(r#"action="/edit/{id}""#)));
}
