// src/catalog/mod.rs
pub mod cache;
pub mod view;

use tracing::{info, warn};

use crate::db::ProductStore;
use cache::CatalogCache;
use view::{CatalogView, LoadState, TagFilter, TagMatch};

/// The first paint: filters applied to whatever snapshot is cached.
pub fn cached_view(cache: &CatalogCache, tag_match: TagMatch, query: &str, tag: TagFilter) -> CatalogView {
    let mut view = CatalogView::new(tag_match);
    view.set_query(query);
    view.set_tag(tag);

    if let Some(cached) = cache.snapshot() {
        view.replace_catalog(cached, LoadState::Cached);
    }
    view
}

/// Fetch the full collection; on success overwrite the snapshot and the view.
/// On failure the view keeps its cached catalog and records the message.
pub fn revalidate<S: ProductStore + ?Sized>(store: &S, cache: &CatalogCache, view: &mut CatalogView) {
    match store.select_all() {
        Ok(fresh) => {
            info!(count = fresh.len(), "fetched fresh catalog");
            if let Err(e) = cache.save(&fresh) {
                warn!(error = %e, "could not persist catalog snapshot");
            }
            view.replace_catalog(fresh, LoadState::Fresh);
        }
        Err(e) => {
            warn!(error = %e, "catalog fetch failed; keeping cached snapshot");
            view.set_state(LoadState::Failed(e.user_message()));
        }
    }
}
