// src/auth/magic.rs
use rusqlite::Connection;

use crate::auth::token::{generate_token_default, hash_token};
use crate::config::AppConfig;
use crate::db::auth as db_auth;
use crate::errors::ServerError;

#[derive(Debug, Clone)]
pub struct MagicLinkConfig {
    /// TTL for magic links in seconds.
    pub ttl_secs: i64,
    /// Relative path used when building links.
    /// Example: "/auth/magic"
    pub magic_path: String,
    /// When set, only addresses at this domain may sign in.
    pub allowed_domain: Option<String>,
}

impl Default for MagicLinkConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 15 * 60,
            magic_path: "/auth/magic".to_string(),
            allowed_domain: None,
        }
    }
}

impl MagicLinkConfig {
    pub fn from_app(cfg: &AppConfig) -> Self {
        Self {
            ttl_secs: cfg.magic_link_ttl_secs,
            allowed_domain: cfg.allowed_email_domain.clone(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssuedMagicLink {
    pub email: String,
    pub user_id: i64,
    /// Raw token (never store this in DB).
    pub token: String,
    pub expires_at: i64,
    /// Relative URL like "/auth/magic?token=..."
    pub link: String,
}

#[derive(Debug, Clone)]
pub struct RedeemedMagicLink {
    pub user_id: i64,
    pub email: String,
}

#[derive(Debug)]
pub struct MagicLinkService {
    cfg: MagicLinkConfig,
}

impl MagicLinkService {
    pub fn new(cfg: MagicLinkConfig) -> Self {
        Self { cfg }
    }

    /// Trim + lowercase, minimal sanity check.
    pub fn normalize_email(email: &str) -> Result<String, ServerError> {
        let e = email.trim().to_lowercase();
        if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
            return Err(ServerError::BadRequest("invalid email".into()));
        }
        Ok(e)
    }

    fn check_domain(&self, email: &str) -> Result<(), ServerError> {
        let Some(domain) = self.cfg.allowed_domain.as_deref() else {
            return Ok(());
        };
        let matches = email
            .rsplit_once('@')
            .map(|(_, d)| d == domain)
            .unwrap_or(false);
        if matches {
            Ok(())
        } else {
            Err(ServerError::BadRequest(format!(
                "Only {domain} emails are allowed."
            )))
        }
    }

    fn build_link(&self, token: &str) -> String {
        format!("{}?token={}", self.cfg.magic_path, token)
    }

    /// Request a magic link (signup + login unified):
    /// - normalize email, enforce the allowed domain
    /// - get_or_create_user
    /// - insert magic link (store hash only)
    pub fn request_link(
        &self,
        conn: &Connection,
        email: &str,
        now: i64,
    ) -> Result<IssuedMagicLink, ServerError> {
        let email = Self::normalize_email(email)?;
        self.check_domain(&email)?;
        let user_id = db_auth::get_or_create_user(conn, &email, now)?;

        let token = generate_token_default();
        let token_hash = hash_token(&token);
        let expires_at = now + self.cfg.ttl_secs;

        db_auth::insert_magic_link(conn, user_id, &token_hash, now, expires_at)?;

        Ok(IssuedMagicLink {
            email,
            user_id,
            link: self.build_link(&token),
            token,
            expires_at,
        })
    }

    /// Redeem a magic link: hash, consume (single-use), return the user.
    pub fn redeem(
        &self,
        conn: &mut Connection,
        token: &str,
        now: i64,
    ) -> Result<RedeemedMagicLink, ServerError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ServerError::BadRequest("missing token".into()));
        }

        let token_hash = hash_token(token);
        let Some(user_id) = db_auth::consume_magic_link(conn, &token_hash, now)? else {
            return Err(ServerError::Unauthorized("invalid or expired link".into()));
        };

        let email = db_auth::user_email(conn, user_id)?;
        Ok(RedeemedMagicLink { user_id, email })
    }
}
