// src/handlers/marketplace.rs
use crate::app::App;
use crate::catalog::view::{CatalogView, LoadState, TagFilter};
use crate::catalog::{cached_view, revalidate};
use crate::forms::FormData;
use crate::responses::{html_response, ResultResp};
use crate::templates::pages::{marketplace_page, results_partial};
use crate::templates::PageCtx;

fn view_from_query(app: &App, query: &FormData) -> CatalogView {
    cached_view(
        &app.catalog_cache(),
        app.config.tag_match,
        query.get("q"),
        TagFilter::parse(query.get("tag")),
    )
}

pub fn page(app: &App, ctx: PageCtx<'_>, query: &FormData) -> ResultResp {
    html_response(marketplace_page(ctx, &view_from_query(app, query)))
}

/// Fetch fresh, overwrite the snapshot, return `#results`.
pub fn refresh(app: &App, query: &FormData) -> ResultResp {
    let mut view = view_from_query(app, query);
    revalidate(&app.db, &app.catalog_cache(), &mut view);
    html_response(results_partial(&view, false))
}

/// Filter the snapshot only. With nothing cached yet the partial asks for a
/// refresh itself.
pub fn results(app: &App, query: &FormData) -> ResultResp {
    let view = view_from_query(app, query);
    let revalidate = *view.state() == LoadState::Loading;
    html_response(results_partial(&view, revalidate))
}
