use maud::{html, Markup};

use crate::catalog::view::TagFilter;
use crate::domain::tags::FILTER_TAGS;

/// Query box and tag chips. Each change re-filters the cached snapshot via
/// `/marketplace/results`; plain GET still works without scripts.
pub fn search_bar(query: &str, tag: &TagFilter) -> Markup {
    html! {
        form
            id="catalog-filters"
            class="search-bar"
            method="get"
            action="/marketplace"
            hx-get="/marketplace/results"
            hx-target="#results"
            hx-swap="outerHTML"
            hx-trigger="input changed delay:250ms from:#q, change"
        {
            label class="sr-only" for="q" { "Search products" }
            input type="search" id="q" name="q" value=(query) placeholder="Search products…";

            div class="tag-filter" role="radiogroup" aria-label="Filter by tag" {
                @for t in FILTER_TAGS {
                    label class="tag-chip" {
                        input type="radio" name="tag" value=(t) checked[tag.as_str() == t];
                        span { (t) }
                    }
                }
            }
            noscript { button type="submit" { "Search" } }
        }
    }
}
