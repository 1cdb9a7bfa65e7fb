use crate::auth::magic::{IssuedMagicLink, MagicLinkConfig, MagicLinkService};
use crate::auth::sessions;
use crate::db::auth as db_auth;
use crate::db::connection::Database;
use crate::errors::ServerError;

#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user_id: i64,
    pub email: String,
    /// Raw session token for the cookie.
    pub session_token: String,
}

/// Request a magic link: creates the user if needed and inserts the link.
/// Returns the issued link (raw token included so caller can email/log).
pub fn request_magic_link(
    db: &Database,
    cfg: &MagicLinkConfig,
    email: &str,
    now: i64,
) -> Result<IssuedMagicLink, ServerError> {
    let svc = MagicLinkService::new(cfg.clone());
    db.with_conn(|conn| svc.request_link(conn, email, now))
}

/// Redeem a magic link token (single-use), update last_login_at and open a session.
pub fn sign_in_with_magic_link(
    db: &Database,
    cfg: &MagicLinkConfig,
    token: &str,
    now: i64,
    session_ttl_secs: i64,
) -> Result<SignedIn, ServerError> {
    let svc = MagicLinkService::new(cfg.clone());

    db.with_conn(|conn| {
        let redeemed = svc.redeem(conn, token, now)?;
        db_auth::touch_last_login(conn, redeemed.user_id, now)?;
        let session_token = sessions::create_session(conn, redeemed.user_id, now, session_ttl_secs)?;

        Ok(SignedIn {
            user_id: redeemed.user_id,
            email: redeemed.email,
            session_token,
        })
    })
}
