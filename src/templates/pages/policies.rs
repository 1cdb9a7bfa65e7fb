use maud::{html, Markup};

use crate::templates::{desktop_layout, PageCtx};

pub fn privacy_page(ctx: PageCtx<'_>) -> Markup {
    desktop_layout(
        ctx,
        "Privacy Policy",
        html! {
            main class="container narrow prose" {
                h1 { "Privacy Policy" }
                p { (ctx.app_name) " keeps only what it needs to run the marketplace." }
                h2 { "What we store" }
                ul {
                    li { "Your email address, used to sign you in and shown to buyers as the listing contact." }
                    li { "Listings you publish, including photos and an optional WhatsApp number." }
                    li { "Your wishlist, stored with your account on this server." }
                }
                h2 { "What we do not store" }
                p { "Card details typed into the payment page are never saved or sent anywhere." }
                h2 { "Cookies" }
                p { "One session cookie keeps you signed in. It is removed when you sign out." }
            }
        },
    )
}

pub fn tos_page(ctx: PageCtx<'_>) -> Markup {
    desktop_layout(
        ctx,
        "Terms of Service",
        html! {
            main class="container narrow prose" {
                h1 { "Terms of Service" }
                p { (ctx.app_name) " connects students who want to buy and sell items. We are not a party to any sale." }
                h2 { "Listings" }
                p { "List only items you own and are allowed to sell. Describe them honestly." }
                h2 { "Payments" }
                p { "The payment page is a demonstration. Arrange real payment directly with the seller." }
                h2 { "Removal" }
                p { "We may remove listings that break these terms." }
            }
        },
    )
}
