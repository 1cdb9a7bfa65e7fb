use maud::{html, Markup};

use crate::forms::FormErrors;

pub mod email_cta;
pub mod error;
pub mod listing_card;
pub mod search;
pub mod wishlist_card;

pub use email_cta::email_cta_form;
pub use error::error_page;
pub use listing_card::{condition_badge, listing_card, price_block};
pub use search::search_bar;
pub use wishlist_card::wishlist_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Inline message under a form field, if that field failed validation.
pub fn field_error(errors: Option<&FormErrors>, field: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.and_then(|e| e.get(field)) {
            p class="field-error" role="alert" { (msg) }
        }
    }
}

pub fn notice(kind: &str, message: &str) -> Markup {
    html! {
        div class=(format!("notice notice-{kind}")) role="status" { (message) }
    }
}
