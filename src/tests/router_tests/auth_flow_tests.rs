use crate::auth::magic::MagicLinkConfig;
use crate::db::magic_auth::request_magic_link;
use crate::errors::ServerError;
use crate::router::{handle, now_unix};
use crate::tests::utils::{body_string, get, location, post_form, sign_in, test_app, test_app_with};

#[test]
fn signin_page_loads_successfully() {
    let (_dir, app) = test_app();
    let resp = handle(get("/signin", None), &app).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains(r#"hx-post="/auth/request-link""#));
}

#[test]
fn request_link_returns_partial_html_for_htmx() {
    let (_dir, app) = test_app();
    let email = "test@clarku.edu";

    let resp = handle(post_form("/auth/request-link", &[("email", email)], None), &app)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Check your email"));
    assert!(body.contains(email));
    // partial only, so HTMX can swap it in
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn request_link_outside_allowed_domain_is_rejected_inline() {
    let (_dir, app) = test_app_with(|cfg| cfg.allowed_email_domain = Some("clarku.edu".into()));

    let resp = handle(
        post_form("/auth/request-link", &[("email", "someone@gmail.com")], None),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Only clarku.edu emails are allowed."));
}

#[test]
fn magic_link_sets_cookie_and_is_single_use() {
    let (_dir, app) = test_app();
    let cfg = MagicLinkConfig::from_app(&app.config);
    let issued = request_magic_link(&app.db, &cfg, "c@clarku.edu", now_unix()).unwrap();
    let uri = format!("/auth/magic?token={}", issued.token);

    let resp = handle(get(&uri, None), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/marketplace");
    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));

    match handle(get(&uri, None), &app) {
        Err(ServerError::Unauthorized(_)) => {}
        other => panic!("expected Unauthorized, got {:?}", other.map(|r| r.status())),
    }

    let used: i64 = app
        .db
        .with_conn(|conn| {
            Ok(conn.query_row(
                "select count(*) from magic_links where used_at is not null",
                [],
                |r| r.get(0),
            )?)
        })
        .unwrap();
    assert_eq!(used, 1);
}

#[test]
fn protected_pages_redirect_to_signin() {
    let (_dir, app) = test_app();
    for uri in ["/add", "/profile", "/edit/1"] {
        let resp = handle(get(uri, None), &app).unwrap();
        assert_eq!(resp.status(), 303, "{uri}");
        assert_eq!(location(&resp), "/signin", "{uri}");
    }
}

#[test]
fn signout_revokes_the_session() {
    let (_dir, app) = test_app();
    let cookie = sign_in(&app, "d@clarku.edu");

    let resp = handle(get("/profile", Some(&cookie)), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let resp = handle(post_form("/auth/signout", &[], Some(&cookie)), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");

    let resp = handle(get("/profile", Some(&cookie)), &app).unwrap();
    assert_eq!(location(&resp), "/signin");
}

#[test]
fn dashboard_redirects_to_profile() {
    let (_dir, app) = test_app();
    let resp = handle(get("/dashboard", None), &app).unwrap();
    assert_eq!(location(&resp), "/profile");
}

#[test]
fn broken_session_lookup_falls_back_to_signed_out() {
    let (_dir, app) = test_app();
    let cookie = sign_in(&app, "buyer@clarku.edu");
    app.db
        .with_conn(|conn| Ok(conn.execute_batch("drop table sessions")?))
        .unwrap();

    let resp = handle(get("/static/main.css", Some(&cookie)), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let resp = handle(get("/", Some(&cookie)), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(r#"href="/signin""#));
    assert!(!body.contains("Sign out"));

    let resp = handle(get("/profile", Some(&cookie)), &app).unwrap();
    assert_eq!(location(&resp), "/signin");
}
