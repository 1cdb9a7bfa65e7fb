use maud::{html, Markup};

use crate::domain::Listing;
use crate::templates::{desktop_layout, PageCtx};

pub fn delete_confirm_page(ctx: PageCtx<'_>, listing: &Listing) -> Markup {
    desktop_layout(
        ctx,
        "Delete listing",
        html! {
            main class="container narrow" {
                h1 { "Delete “" (listing.name) "”?" }
                p { "This removes the listing for everyone. It cannot be undone." }

                div class="actions" {
                    form method="post" action=(format!("/edit/{}/delete", listing.id)) class="inline" {
                        input type="hidden" name="confirmed" value="true";
                        button type="submit" class="danger" { "Yes, delete it" }
                    }
                    a href=(format!("/product/{}", listing.id)) class="button" { "Keep it" }
                }
            }
        },
    )
}
