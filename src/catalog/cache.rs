// src/catalog/cache.rs
use tracing::{debug, warn};

use crate::domain::Listing;
use crate::errors::ServerError;
use crate::local_store::FileStore;

pub const CACHE_KEY: &str = "cachedProducts";

/// Single-slot snapshot of the last full product fetch.
///
/// Whole-collection, last-write-wins; there is no merge and no eviction.
#[derive(Debug, Clone)]
pub struct CatalogCache {
    store: FileStore,
}

impl CatalogCache {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// Last saved catalog, or empty when nothing usable is stored.
    pub fn load(&self) -> Vec<Listing> {
        self.snapshot().unwrap_or_default()
    }

    /// Like `load`, but `None` when no usable snapshot exists, so a saved
    /// empty catalog can be told apart from a missing one.
    pub fn snapshot(&self) -> Option<Vec<Listing>> {
        let raw = self.store.get_item(CACHE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(listings) => Some(listings),
            Err(e) => {
                warn!(error = %e, "cached catalog is unreadable; treating as missing");
                None
            }
        }
    }

    pub fn save(&self, listings: &[Listing]) -> Result<(), ServerError> {
        let json = serde_json::to_string(listings).map_err(|_| ServerError::InternalError)?;
        self.store.set_item(CACHE_KEY, &json)?;
        debug!(count = listings.len(), "catalog snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::listing;

    fn cache() -> (tempfile::TempDir, CatalogCache) {
        let dir = tempfile::tempdir().unwrap();
        let cache = CatalogCache::new(FileStore::new(dir.path()));
        (dir, cache)
    }

    #[test]
    fn load_without_snapshot_is_empty() {
        let (_dir, cache) = cache();
        assert!(cache.load().is_empty());
    }

    #[test]
    fn saved_empty_catalog_is_a_snapshot() {
        let (_dir, cache) = cache();
        assert_eq!(cache.snapshot(), None);
        cache.save(&[]).unwrap();
        assert_eq!(cache.snapshot(), Some(Vec::new()));
    }

    #[test]
    fn save_then_load_is_deep_equal() {
        let (_dir, cache) = cache();
        let mut lamp = listing(7, "Desk Lamp", "Home,Furniture");
        lamp.original_price = Some(40.0);
        lamp.phone = Some("5085551234".into());
        let list = vec![lamp, listing(8, "Chem Textbook", "Books")];

        cache.save(&list).unwrap();
        assert_eq!(cache.load(), list);
    }

    #[test]
    fn save_replaces_the_whole_snapshot() {
        let (_dir, cache) = cache();
        cache
            .save(&[listing(1, "A", ""), listing(2, "B", "")])
            .unwrap();
        cache.save(&[listing(3, "C", "")]).unwrap();

        let ids: Vec<_> = cache.load().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn garbage_snapshot_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set_item(CACHE_KEY, "{not json").unwrap();
        let cache = CatalogCache::new(store);
        assert!(cache.load().is_empty());
        assert_eq!(cache.snapshot(), None);
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        CatalogCache::new(store.clone())
            .save(&[listing(1, "A", "Books")])
            .unwrap();

        let raw = store.get_item(CACHE_KEY).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"originalPrice\":null"));
        assert!(raw.contains("\"listedDate\""));
    }
}
