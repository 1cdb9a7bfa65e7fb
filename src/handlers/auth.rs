// src/handlers/auth.rs
use tracing::{info, warn};

use crate::app::App;
use crate::auth::sessions::{clear_session_cookie, revoke_session, session_cookie};
use crate::db::magic_auth::{request_magic_link, sign_in_with_magic_link};
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::responses::{html_response, redirect_with_cookie, ResultResp};
use crate::templates::pages::{check_email_content, request_failed_content, signin_page};
use crate::templates::PageCtx;

pub fn signin(app: &App, ctx: PageCtx<'_>) -> ResultResp {
    html_response(signin_page(ctx, app.config.allowed_email_domain.as_deref()))
}

/// HTMX partial for `#auth-result`. Address problems render inline so the
/// swap still happens.
pub fn request_link(app: &App, form: &FormData, now: i64) -> ResultResp {
    let cfg = app.magic_link_config();
    let issued = match request_magic_link(&app.db, &cfg, form.get("email"), now) {
        Ok(issued) => issued,
        Err(ServerError::BadRequest(msg)) => return html_response(request_failed_content(&msg)),
        Err(e) => return Err(e),
    };

    let absolute = format!("{}{}", app.config.base_url, issued.link);
    match &app.mailer {
        Some(mailer) => {
            if let Err(e) = mailer.send_magic_link(&issued.email, &absolute, cfg.ttl_secs / 60) {
                warn!(email = %issued.email, error = %e, "magic link email failed");
                return html_response(request_failed_content(
                    "We could not send the sign-in email. Please try again.",
                ));
            }
            info!(email = %issued.email, "magic link emailed");
        }
        None => {
            info!(email = %issued.email, link = %absolute, "mail disabled; magic link issued");
        }
    }

    html_response(check_email_content(&issued.email))
}

pub fn redeem(app: &App, query: &FormData, now: i64) -> ResultResp {
    let signed_in = sign_in_with_magic_link(
        &app.db,
        &app.magic_link_config(),
        query.get("token"),
        now,
        app.config.session_ttl_secs,
    )?;
    info!(user_id = signed_in.user_id, email = %signed_in.email, "signed in");

    redirect_with_cookie(
        302,
        "/marketplace",
        &session_cookie(&signed_in.session_token, app.config.session_ttl_secs),
    )
}

pub fn signout(app: &App, session_token: Option<&str>, now: i64) -> ResultResp {
    if let Some(token) = session_token {
        app.db.with_conn(|conn| revoke_session(conn, token, now))?;
    }
    redirect_with_cookie(303, "/", &clear_session_cookie())
}
