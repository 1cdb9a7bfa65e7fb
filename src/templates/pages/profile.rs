use maud::{html, Markup};

use crate::domain::contact::owner_display_name;
use crate::domain::Listing;
use crate::templates::components::{listing_card, wishlist_card};
use crate::templates::{desktop_layout, PageCtx};
use crate::wishlist::WishlistEntry;

pub fn profile_page(
    ctx: PageCtx<'_>,
    email: &str,
    listings: &[Listing],
    wishlist: &[WishlistEntry],
) -> Markup {
    desktop_layout(
        ctx,
        "Profile",
        html! {
            main class="container" {
                h1 { (owner_display_name(email)) }
                p class="muted" { (email) }

                section {
                    div class="page-head" {
                        h2 { "My listings (" (listings.len()) ")" }
                        a href="/add" class="button primary" { "+ Add listing" }
                    }
                    @if listings.is_empty() {
                        p class="empty" { "You have not listed anything yet." }
                    } @else {
                        div class="listing-grid" {
                            @for listing in listings {
                                div class="owned-listing" {
                                    (listing_card(listing))
                                    a href=(format!("/edit/{}", listing.id)) class="link" { "Edit" }
                                }
                            }
                        }
                    }
                }

                section {
                    h2 { "Wishlist (" (wishlist.len()) ")" }
                    @if wishlist.is_empty() {
                        p class="empty" {
                            "Nothing saved yet. "
                            a href="/marketplace" { "Browse the marketplace" }
                        }
                    } @else {
                        div class="listing-grid" {
                            @for entry in wishlist {
                                (wishlist_card(entry))
                            }
                        }
                    }
                }
            }
        },
    )
}
