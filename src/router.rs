use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::Request;
use tracing::{debug, warn};

use crate::app::App;
use crate::auth::sessions::{load_user_from_session, token_from_cookie_header, SessionUser};
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::handlers::{self, parse_id, signed_in};
use crate::responses::{redirect, ResultResp};
use crate::templates::PageCtx;

/// Images travel inline in form bodies.
pub const MAX_BODY_BYTES: u64 = 8 * 1024 * 1024;

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn session_token(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(token_from_cookie_header)
        .map(str::to_string)
}

/// A failed lookup is logged and the visitor is treated as signed out.
fn current_user(app: &App, token: Option<&str>, now: i64) -> Option<SessionUser> {
    let token = token?;
    match app
        .db
        .with_conn(|conn| load_user_from_session(conn, token, now))
    {
        Ok(user) => user,
        Err(e) => {
            warn!(error = %e, "session lookup failed; continuing signed out");
            None
        }
    }
}

/// Reads an urlencoded body, refusing anything over `MAX_BODY_BYTES`.
fn read_form(req: Request) -> Result<FormData, ServerError> {
    let mut body = req.into_body();
    let mut raw = String::new();
    body.reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;

    if raw.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("Request body is too large.".into()));
    }
    Ok(FormData::parse(&raw))
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let now = now_unix();
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = FormData::from_query(req.uri().query());

    let token = session_token(&req);
    let user = current_user(app, token.as_deref(), now);
    let ctx = PageCtx::new(&app.config.app_name, user.as_ref());

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    debug!(%method, %path, signed_in = user.is_some(), "request");

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => handlers::pages::home(ctx),
        ("GET", ["privacy-policy"]) => handlers::pages::privacy(ctx),
        ("GET", ["tos"]) => handlers::pages::tos(ctx),
        ("GET", ["static", "main.css"]) => handlers::pages::stylesheet(),

        ("GET", ["signin"]) => handlers::auth::signin(app, ctx),
        ("POST", ["auth", "request-link"]) => {
            handlers::auth::request_link(app, &read_form(req)?, now)
        }
        ("GET", ["auth", "magic"]) => handlers::auth::redeem(app, &query, now),
        ("POST", ["auth", "signout"]) => handlers::auth::signout(app, token.as_deref(), now),

        ("GET", ["dashboard"]) => redirect("/profile"),

        ("GET", ["marketplace"]) => handlers::marketplace::page(app, ctx, &query),
        ("GET", ["marketplace", "refresh"]) => handlers::marketplace::refresh(app, &query),
        ("GET", ["marketplace", "results"]) => handlers::marketplace::results(app, &query),

        ("GET", ["product", id]) => handlers::listings::product(app, ctx, parse_id(id)?),

        ("POST", ["wishlist", id, "toggle"]) => {
            let id = parse_id(id)?;
            signed_in(user.as_ref(), |u| handlers::wishlist::toggle(app, u, id))
        }
        ("POST", ["wishlist", id, "remove"]) => {
            let id = parse_id(id)?;
            signed_in(user.as_ref(), |u| handlers::wishlist::remove(app, u, id))
        }

        ("GET", ["add"]) => signed_in(user.as_ref(), |_| handlers::listings::add_form(ctx)),
        ("POST", ["add"]) => {
            let form = read_form(req)?;
            signed_in(user.as_ref(), |u| {
                handlers::listings::add_submit(app, ctx, u, &form)
            })
        }

        ("GET", ["edit", id]) => {
            let id = parse_id(id)?;
            signed_in(user.as_ref(), |u| handlers::listings::edit_form(app, ctx, u, id))
        }
        ("POST", ["edit", id]) => {
            let id = parse_id(id)?;
            let form = read_form(req)?;
            signed_in(user.as_ref(), |u| {
                handlers::listings::edit_submit(app, ctx, u, id, &form)
            })
        }
        ("POST", ["edit", id, "delete"]) => {
            let id = parse_id(id)?;
            let form = read_form(req)?;
            signed_in(user.as_ref(), |u| {
                handlers::listings::delete(app, ctx, u, id, &form)
            })
        }

        ("GET", ["profile"]) => {
            signed_in(user.as_ref(), |u| handlers::profile::profile(app, ctx, u))
        }

        ("GET", ["payment"]) => handlers::payment::form(app, ctx, &query),
        ("POST", ["payment"]) => {
            let form = read_form(req)?;
            handlers::payment::submit(app, ctx, &form)
        }
        ("POST", ["payment", "complete"]) => {
            let form = read_form(req)?;
            handlers::payment::complete(app, ctx, &form)
        }

        _ => Err(ServerError::NotFound),
    }
}
