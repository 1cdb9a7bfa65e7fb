// src/domain/contact.rs
use url::form_urlencoded::byte_serialize;

/// WhatsApp numbers are assumed to be North American.
const WHATSAPP_COUNTRY_PREFIX: &str = "+1";

/// Gmail compose deep link addressed to the listing owner.
pub fn mail_compose_link(owner_email: &str) -> String {
    let to: String = byte_serialize(owner_email.trim().as_bytes()).collect();
    format!("https://mail.google.com/mail/u/0/?fs=1&to={to}&tf=cm")
}

pub fn whatsapp_link(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("https://wa.me/{WHATSAPP_COUNTRY_PREFIX}{digits}"))
}

/// Local part of the owner's email, shown as the seller name.
pub fn owner_display_name(owner_email: &str) -> &str {
    match owner_email.split('@').next() {
        Some(local) if !local.trim().is_empty() => local,
        _ => "Unknown",
    }
}
