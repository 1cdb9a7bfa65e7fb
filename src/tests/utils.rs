use crate::app::App;
use crate::auth::magic::MagicLinkConfig;
use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::db::magic_auth::{request_magic_link, sign_in_with_magic_link};
use crate::router::now_unix;
use astra::{Body, Request, Response};
use std::io::Read;
use std::time::Duration;
use tempfile::TempDir;
use url::form_urlencoded;

pub const TEST_IMAGE: &str = "data:image/png;base64,iVBORw0KGgo=";

/// A fresh app over a throwaway database and data directory.
/// Keep the `TempDir` alive for the whole test.
pub fn test_app_with(tweak: impl FnOnce(&mut AppConfig)) -> (TempDir, App) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig {
        database: dir.path().join("test.sqlite3"),
        data_dir: dir.path().join("data"),
        payment_delay: Duration::ZERO,
        ..AppConfig::default()
    };
    tweak(&mut config);

    let db = Database::new(config.database.clone());
    init_db(&db, "sql/schema.sql").unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    (dir, App::new(db, config))
}

pub fn test_app() -> (TempDir, App) {
    test_app_with(|_| {})
}

/// Runs the whole magic link flow and returns a `Cookie:` header value.
pub fn sign_in(app: &App, email: &str) -> String {
    let now = now_unix();
    let cfg = MagicLinkConfig::from_app(&app.config);
    let issued = request_magic_link(&app.db, &cfg, email, now).unwrap();
    let signed_in =
        sign_in_with_magic_link(&app.db, &cfg, &issued.token, now, app.config.session_ttl_secs)
            .unwrap();
    format!("session={}", signed_in.session_token)
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> Request {
    let body = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    let mut builder = http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
