// src/config.rs
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::view::TagMatch;

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_WORKERS: usize = 8;
const DEFAULT_MAGIC_LINK_TTL_SECS: i64 = 15 * 60;
const DEFAULT_SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;
const DEFAULT_PAYMENT_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TagMatchArg {
    Substring,
    Exact,
}

impl From<TagMatchArg> for TagMatch {
    fn from(arg: TagMatchArg) -> Self {
        match arg {
            TagMatchArg::Substring => TagMatch::Substring,
            TagMatchArg::Exact => TagMatch::Exact,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "clarkmart", about = "Student marketplace web server")]
pub struct CliArgs {
    /// Address to listen on.
    #[arg(long, env = "CLARKMART_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// SQLite database file.
    #[arg(long, env = "CLARKMART_DATABASE", default_value = "clarkmart.sqlite3")]
    pub database: PathBuf,

    /// Schema applied at start-up.
    #[arg(long, env = "CLARKMART_SCHEMA", default_value = "sql/schema.sql")]
    pub schema: PathBuf,

    /// Directory for the catalog snapshot and per-user wishlists.
    #[arg(long, env = "CLARKMART_DATA_DIR", default_value = "clarkmart-data")]
    pub data_dir: PathBuf,

    #[arg(long, env = "CLARKMART_WORKERS", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    #[arg(long, env = "CLARKMART_APP_NAME", default_value = "ClarkMart")]
    pub app_name: String,

    /// Public origin used when building links that leave the site (emails).
    #[arg(long, env = "CLARKMART_BASE_URL", default_value = "http://127.0.0.1:3000")]
    pub base_url: String,

    /// Only accept sign-ins from this email domain (e.g. clarku.edu).
    #[arg(long, env = "CLARKMART_ALLOWED_EMAIL_DOMAIN")]
    pub allowed_email_domain: Option<String>,

    #[arg(long, env = "BREVO_API_KEY", hide_env_values = true)]
    pub brevo_api_key: Option<String>,

    #[arg(long, env = "CLARKMART_SENDER_EMAIL", default_value = "noreply@clarkmart.local")]
    pub sender_email: String,

    #[arg(long, env = "CLARKMART_SENDER_NAME", default_value = "ClarkMart")]
    pub sender_name: String,

    #[arg(long, env = "CLARKMART_MAGIC_LINK_TTL_SECS", default_value_t = DEFAULT_MAGIC_LINK_TTL_SECS)]
    pub magic_link_ttl_secs: i64,

    #[arg(long, env = "CLARKMART_SESSION_TTL_SECS", default_value_t = DEFAULT_SESSION_TTL_SECS)]
    pub session_ttl_secs: i64,

    /// Artificial processing delay of the payment simulation.
    #[arg(long, env = "CLARKMART_PAYMENT_DELAY_MS", default_value_t = DEFAULT_PAYMENT_DELAY_MS)]
    pub payment_delay_ms: u64,

    #[arg(long, env = "CLARKMART_TAG_MATCH", value_enum, default_value_t = TagMatchArg::Substring)]
    pub tag_match: TagMatchArg,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_key: String,
    pub sender_email: String,
    pub sender_name: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub database: PathBuf,
    pub schema: PathBuf,
    pub data_dir: PathBuf,
    pub workers: usize,
    pub app_name: String,
    pub base_url: String,
    pub allowed_email_domain: Option<String>,
    pub mail: Option<MailConfig>,
    pub magic_link_ttl_secs: i64,
    pub session_ttl_secs: i64,
    pub payment_delay: Duration,
    pub tag_match: TagMatch,
}

impl AppConfig {
    pub fn from_args(args: CliArgs) -> Self {
        let CliArgs {
            bind,
            database,
            schema,
            data_dir,
            workers,
            app_name,
            base_url,
            allowed_email_domain,
            brevo_api_key,
            sender_email,
            sender_name,
            magic_link_ttl_secs,
            session_ttl_secs,
            payment_delay_ms,
            tag_match,
        } = args;

        let mail = brevo_api_key
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| MailConfig {
                api_key,
                sender_email,
                sender_name,
            });

        let allowed_email_domain = allowed_email_domain
            .map(|d| d.trim().trim_start_matches('@').to_lowercase())
            .filter(|d| !d.is_empty());

        Self {
            bind,
            database,
            schema,
            data_dir,
            workers: workers.max(1),
            app_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            allowed_email_domain,
            mail,
            magic_link_ttl_secs,
            session_ttl_secs,
            payment_delay: Duration::from_millis(payment_delay_ms),
            tag_match: tag_match.into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database: PathBuf::from("clarkmart.sqlite3"),
            schema: PathBuf::from("sql/schema.sql"),
            data_dir: PathBuf::from("clarkmart-data"),
            workers: DEFAULT_WORKERS,
            app_name: "ClarkMart".to_string(),
            base_url: "http://127.0.0.1:3000".to_string(),
            allowed_email_domain: None,
            mail: None,
            magic_link_ttl_secs: DEFAULT_MAGIC_LINK_TTL_SECS,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            payment_delay: Duration::from_millis(DEFAULT_PAYMENT_DELAY_MS),
            tag_match: TagMatch::Substring,
        }
    }
}
