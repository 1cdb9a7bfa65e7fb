// src/auth/sessions.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::token::{generate_token_default, hash_token};
use crate::errors::ServerError;

pub const SESSION_COOKIE: &str = "session";

/// The signed-in user as seen by a request. Read-only for the whole request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: i64,
    pub email: String,
}

/// Creates a session row and returns the raw token for the cookie.
pub fn create_session(
    conn: &Connection,
    user_id: i64,
    now: i64,
    ttl_secs: i64,
) -> Result<String, ServerError> {
    let raw_token = generate_token_default();
    let hash = hash_token(&raw_token);
    let expires_at = now + ttl_secs;

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, hash.as_slice(), now, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

pub fn load_user_from_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<SessionUser>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        r#"
        select u.id, u.email
        from sessions s
        join users u on u.id = s.user_id
        where s.token_hash = ?
          and s.expires_at > ?
          and s.revoked_at is null
        "#,
        params![hash.as_slice(), now],
        |row| {
            Ok(SessionUser {
                user_id: row.get(0)?,
                email: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);
    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}

/// Pull the session token out of a `Cookie:` header value.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::auth::get_or_create_user;
    use crate::db::auth::tests::memory_db;

    #[test]
    fn session_round_trip() {
        let conn = memory_db();
        let user_id = get_or_create_user(&conn, "s@clarku.edu", 1000).unwrap();

        let token = create_session(&conn, user_id, 1000, 60).unwrap();
        let user = load_user_from_session(&conn, &token, 1001).unwrap().unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "s@clarku.edu");
    }

    #[test]
    fn expired_or_revoked_sessions_are_ignored() {
        let conn = memory_db();
        let user_id = get_or_create_user(&conn, "s@clarku.edu", 1000).unwrap();

        let token = create_session(&conn, user_id, 1000, 60).unwrap();
        assert!(load_user_from_session(&conn, &token, 1060).unwrap().is_none());

        let token = create_session(&conn, user_id, 1000, 60).unwrap();
        revoke_session(&conn, &token, 1010).unwrap();
        assert!(load_user_from_session(&conn, &token, 1011).unwrap().is_none());
    }

    #[test]
    fn cookie_header_parsing() {
        assert_eq!(token_from_cookie_header("session=abc"), Some("abc"));
        assert_eq!(
            token_from_cookie_header("theme=dark; session=abc-_1 ; x=y"),
            Some("abc-_1")
        );
        assert_eq!(token_from_cookie_header("sessionx=abc"), None);
        assert_eq!(token_from_cookie_header("session="), None);
    }

    #[test]
    fn cookie_strings() {
        assert!(session_cookie("tok", 60).starts_with("session=tok; Path=/; HttpOnly"));
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
