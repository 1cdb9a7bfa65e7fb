use maud::{html, Markup};

use crate::templates::components::{condition_badge, price_block};
use crate::wishlist::WishlistEntry;

pub fn wishlist_card(entry: &WishlistEntry) -> Markup {
    html! {
        div class="listing-card wishlist-card" {
            a href=(format!("/product/{}", entry.id)) {
                div class="listing-image" {
                    img src=(entry.image) alt=(entry.name) loading="lazy";
                }
                div class="listing-body" {
                    h3 class="listing-name" { (entry.name) }
                    (price_block(entry.price, entry.original_price))
                    (condition_badge(entry.condition))
                }
            }
            form method="post" action=(format!("/wishlist/{}/remove", entry.id)) {
                button type="submit" class="link danger" { "Remove" }
            }
        }
    }
}
