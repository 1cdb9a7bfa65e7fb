// src/mailer.rs

use reqwest::blocking::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::MailConfig;

const BREVO_SEND_URL: &str = "https://api.brevo.com/v3/smtp/email";

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
}

pub struct BrevoMailer {
    api_key: String,
    sender_email: String,
    sender_name: String,
    app_name: String,
    client: Client,
}

#[derive(Serialize)]
struct BrevoSender<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct BrevoRecipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoPayload<'a> {
    sender: BrevoSender<'a>,
    to: Vec<BrevoRecipient<'a>>,
    subject: String,
    html_content: String,
}

impl BrevoMailer {
    pub fn new(cfg: &MailConfig, app_name: &str) -> Self {
        Self {
            api_key: cfg.api_key.clone(),
            sender_email: cfg.sender_email.clone(),
            sender_name: cfg.sender_name.clone(),
            app_name: app_name.to_string(),
            client: Client::new(),
        }
    }

    /// `magic_link` must be absolute; mail clients cannot resolve relative links.
    pub fn send_magic_link(
        &self,
        recipient_email: &str,
        magic_link: &str,
        ttl_minutes: i64,
    ) -> Result<(), MailerError> {
        let payload = BrevoPayload {
            sender: BrevoSender {
                name: &self.sender_name,
                email: &self.sender_email,
            },
            to: vec![BrevoRecipient {
                email: recipient_email,
            }],
            subject: format!("Your {} sign-in link", self.app_name),
            html_content: magic_link_html(&self.app_name, magic_link, ttl_minutes),
        };

        let resp = self
            .client
            .post(BREVO_SEND_URL)
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            warn!(%status, "brevo rejected magic link email");
            return Err(MailerError::ApiError(format!("{status}: {error_body}")));
        }

        debug!(to = recipient_email, "magic link email sent");
        Ok(())
    }
}

fn magic_link_html(app_name: &str, link: &str, ttl_minutes: i64) -> String {
    format!(
        r#"
        <h1>Sign in to {app_name}</h1>
        <p>Click the link below to sign in. It expires in {ttl_minutes} minutes and works once.</p>
        <p><a href="{link}">Sign in to {app_name}</a></p>
        <p>If you did not request this link, you can safely ignore this email.</p>
    "#
    )
}
