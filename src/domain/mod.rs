pub mod contact;
pub mod listing;
pub mod tags;

pub use listing::{Condition, Listing, ListingDraft, ListingId, NewListing};
