use crate::templates::{components::email_cta_form, desktop_layout, PageCtx};
use maud::{html, Markup};

pub fn signin_page(ctx: PageCtx<'_>, allowed_domain: Option<&str>) -> Markup {
    desktop_layout(
        ctx,
        "Sign in",
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                p class="lead" {
                    "Enter your email and we’ll send you a secure sign-in link."
                }
                @if let Some(domain) = allowed_domain {
                    p class="muted" { "Only " (domain) " addresses can sign in." }
                }

                (email_cta_form(allowed_domain))
            }
        },
    )
}
