// src/wishlist.rs
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{Condition, Listing, ListingId};
use crate::errors::ServerError;
use crate::local_store::FileStore;

pub const WISHLIST_KEY: &str = "wishlist";

/// Display fields copied from a listing when it was wishlisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub id: ListingId,
    pub name: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: String,
    pub condition: Condition,
}

impl From<&Listing> for WishlistEntry {
    fn from(l: &Listing) -> Self {
        Self {
            id: l.id,
            name: l.name.clone(),
            price: l.price,
            original_price: l.original_price,
            image: l.image.clone(),
            condition: l.condition,
        }
    }
}

/// A user's saved listings. Lives only in the local store; the product
/// store never sees it.
#[derive(Debug, Clone)]
pub struct Wishlist {
    store: FileStore,
}

impl Wishlist {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// Anything that is not a JSON array of entries is reset to `[]`.
    pub fn load(&self) -> Vec<WishlistEntry> {
        let Some(raw) = self.store.get_item(WISHLIST_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<WishlistEntry>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "wishlist state is corrupted; resetting");
                if let Err(e) = self.save(&[]) {
                    warn!(error = %e, "could not reset wishlist");
                }
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[WishlistEntry]) -> Result<(), ServerError> {
        let json = serde_json::to_string(entries).map_err(|_| ServerError::InternalError)?;
        self.store.set_item(WISHLIST_KEY, &json)
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.load().iter().any(|e| e.id == id)
    }

    /// Remove when present, otherwise append a snapshot.
    /// Returns whether the listing is wishlisted afterwards.
    pub fn toggle(&self, listing: &Listing) -> Result<bool, ServerError> {
        let mut entries = self.load();
        let now_present = match entries.iter().position(|e| e.id == listing.id) {
            Some(idx) => {
                entries.remove(idx);
                false
            }
            None => {
                entries.push(WishlistEntry::from(listing));
                true
            }
        };
        self.save(&entries)?;
        debug!(product_id = listing.id, now_present, "wishlist toggled");
        Ok(now_present)
    }

    pub fn remove(&self, id: ListingId) -> Result<(), ServerError> {
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() != before {
            self.save(&entries)?;
        }
        Ok(())
    }

    /// Drop entries whose listing is gone and refresh the copied fields of
    /// the rest from `catalog`. Writes only when something changed.
    pub fn reconcile(&self, catalog: &[Listing]) -> Result<Vec<WishlistEntry>, ServerError> {
        let entries = self.load();
        let reconciled: Vec<WishlistEntry> = entries
            .iter()
            .filter_map(|e| catalog.iter().find(|l| l.id == e.id))
            .map(WishlistEntry::from)
            .collect();

        if reconciled != entries {
            debug!(
                before = entries.len(),
                after = reconciled.len(),
                "wishlist reconciled against catalog"
            );
            self.save(&reconciled)?;
        }
        Ok(reconciled)
    }
}
