// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout, PageCtx};
use maud::{html, Markup};

pub fn home_page(ctx: PageCtx<'_>) -> Markup {
    desktop_layout(
        ctx,
        "Home",
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Buy and sell on campus with " (ctx.app_name) }
                    p class="lead" {
                        "Textbooks, furniture, electronics and more from students near you."
                    }
                    div class="hero-actions" {
                        a href="/marketplace" class="button primary" { "Browse the marketplace" }
                        @if ctx.user.is_some() {
                            a href="/add" class="button" { "List something" }
                        } @else {
                            a href="/signin" class="button" { "Sign in to sell" }
                        }
                    }
                }

                div class="grid-3" {
                    (card("List in a minute", html! {
                        p { "Add a photo, a price and a few tags." }
                    }))
                    (card("Talk directly", html! {
                        p { "Reach sellers by email or WhatsApp. No middleman." }
                    }))
                    (card("Save favourites", html! {
                        p { "Keep a wishlist and come back to it from your profile." }
                    }))
                }
            }
        },
    )
}
