use maud::{html, Markup};

use crate::domain::listing::{discount_percent, format_price};
use crate::domain::{Condition, Listing};

pub fn condition_badge(condition: Condition) -> Markup {
    let class = match condition {
        Condition::New => "badge badge-new",
        Condition::LikeNew => "badge badge-like-new",
        Condition::Good => "badge badge-good",
        Condition::Fair => "badge badge-fair",
    };
    html! { span class=(class) { (condition.as_str()) } }
}

/// Price, struck-through original price and the "-N%" badge when discounted.
pub fn price_block(price: f64, original_price: Option<f64>) -> Markup {
    let discount = discount_percent(price, original_price);
    html! {
        div class="price-block" {
            span class="price" { (format_price(price)) }
            @if let (Some(original), Some(pct)) = (original_price, discount) {
                " "
                s class="original-price" { (format_price(original)) }
                " "
                span class="badge badge-discount" { "-" (pct) "%" }
            }
        }
    }
}

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        a class="listing-card" href=(format!("/product/{}", listing.id)) {
            div class="listing-image" {
                img src=(listing.image) alt=(listing.name) loading="lazy";
            }
            div class="listing-body" {
                h3 class="listing-name" { (listing.name) }
                (price_block(listing.price, listing.original_price))
                div class="listing-meta" {
                    (condition_badge(listing.condition))
                    " "
                    span class="muted" { (listing.location) }
                }
            }
        }
    }
}
