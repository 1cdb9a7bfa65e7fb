use maud::{html, Markup};

use crate::domain::contact::{mail_compose_link, owner_display_name, whatsapp_link};
use crate::domain::Listing;
use crate::templates::components::{condition_badge, price_block};
use crate::templates::{desktop_layout, PageCtx};

pub fn product_page(ctx: PageCtx<'_>, listing: &Listing, wishlisted: bool) -> Markup {
    let is_owner = ctx.email().is_some_and(|e| listing.is_owned_by(e));
    let whatsapp = listing.phone.as_deref().and_then(whatsapp_link);

    desktop_layout(
        ctx,
        &listing.name,
        html! {
            main class="container product" {
                p { a href="/marketplace" { "← Back to marketplace" } }

                div class="product-layout" {
                    div class="product-image" {
                        img src=(listing.image) alt=(listing.name);
                    }

                    div class="product-info" {
                        h1 { (listing.name) }
                        (price_block(listing.price, listing.original_price))
                        div class="listing-meta" {
                            (condition_badge(listing.condition))
                            " "
                            span class="muted" { (listing.location) }
                        }
                        @if !listing.tag_list().is_empty() {
                            ul class="tags" {
                                @for tag in listing.tag_list() {
                                    li class="tag" { (tag) }
                                }
                            }
                        }
                        p class="description" { (listing.description) }
                        p class="muted small" {
                            "Listed " (listing.listed_date.format("%B %-d, %Y").to_string())
                            " by " (owner_display_name(&listing.owner))
                        }

                        div class="actions" {
                            @if is_owner {
                                a href=(format!("/edit/{}", listing.id)) class="button" { "Edit" }
                                form method="post" action=(format!("/edit/{}/delete", listing.id)) class="inline" {
                                    button type="submit" class="danger" { "Delete" }
                                }
                            } @else {
                                a class="button primary"
                                    href=(format!("/payment?product={}&amount={}", listing.id, listing.price)) {
                                    "Buy Now"
                                }
                                a class="button" href=(mail_compose_link(&listing.owner))
                                    target="_blank" rel="noopener" { "Email seller" }
                                @if let Some(link) = &whatsapp {
                                    a class="button" href=(link) target="_blank" rel="noopener" { "WhatsApp" }
                                }
                            }

                            @if ctx.user.is_some() {
                                form method="post" action=(format!("/wishlist/{}/toggle", listing.id)) class="inline" {
                                    button type="submit" class="wishlist-toggle" aria-pressed=(if wishlisted { "true" } else { "false" }) {
                                        @if wishlisted { "♥ Saved" } @else { "♡ Save" }
                                    }
                                }
                            } @else {
                                a href="/signin" class="muted" { "Sign in to save" }
                            }
                        }
                    }
                }
            }
        },
    )
}
