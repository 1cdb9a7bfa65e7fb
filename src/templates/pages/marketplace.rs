use maud::{html, Markup};

use crate::catalog::view::{CatalogView, LoadState};
use crate::templates::components::{listing_card, search_bar};
use crate::templates::{desktop_layout, PageCtx};

/// First paint: the cached snapshot, with a load trigger that swaps in the
/// fresh catalog once it arrives.
pub fn marketplace_page(ctx: PageCtx<'_>, view: &CatalogView) -> Markup {
    desktop_layout(
        ctx,
        "Marketplace",
        html! {
            main class="container" {
                div class="page-head" {
                    h1 { "Marketplace" }
                    @if ctx.user.is_some() {
                        a href="/add" class="button primary" { "+ Add listing" }
                    }
                }
                (search_bar(view.query(), view.tag()))
                (results_partial(view, true))
            }
        },
    )
}

/// `#results`, swapped by the search bar and by the background refresh.
pub fn results_partial(view: &CatalogView, revalidate: bool) -> Markup {
    html! {
        div
            id="results"
            class="results"
            aria-busy=[revalidate.then_some("true")]
            hx-get=[revalidate.then_some("/marketplace/refresh")]
            hx-trigger=[revalidate.then_some("load")]
            hx-include=[revalidate.then_some("#catalog-filters")]
            hx-swap=[revalidate.then_some("outerHTML")]
        {
            @match view.state() {
                LoadState::Failed(msg) => {
                    div class="notice notice-error" role="alert" {
                        "Could not load the latest listings: " (msg)
                    }
                }
                LoadState::Cached if revalidate => {
                    p class="muted small" { "Showing saved listings while we check for updates…" }
                }
                _ => {}
            }

            @if view.visible_count() == 0 {
                @if *view.state() == LoadState::Loading {
                    p class="loading" { "Loading products…" }
                } @else {
                    p class="empty" { "No products found." }
                }
            } @else {
                p class="muted small" { (view.visible_count()) " of " (view.catalog().len()) " products" }
                div class="listing-grid" {
                    @for listing in view.visible() {
                        (listing_card(listing))
                    }
                }
            }
        }
    }
}
