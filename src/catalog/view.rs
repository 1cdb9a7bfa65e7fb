// src/catalog/view.rs
use crate::domain::listing::split_tags;
use crate::domain::tags::ALL_SENTINEL;
use crate::domain::Listing;

/// How a selected tag is compared against a listing's tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagMatch {
    /// Case-insensitive substring of the comma-joined string.
    /// "Game" matches a listing tagged "Games".
    #[default]
    Substring,
    /// Case-insensitive membership in the parsed tag list.
    Exact,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Empty input and the "ALL" sentinel both mean no filter.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_SENTINEL {
            TagFilter::All
        } else {
            TagFilter::Tag(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TagFilter::All => ALL_SENTINEL,
            TagFilter::Tag(t) => t,
        }
    }
}

pub fn name_matches(listing: &Listing, query: &str) -> bool {
    query.is_empty() || listing.name.to_lowercase().contains(&query.to_lowercase())
}

pub fn tag_matches(listing: &Listing, tag: &TagFilter, mode: TagMatch) -> bool {
    let TagFilter::Tag(tag) = tag else {
        return true;
    };
    let tag = tag.to_lowercase();
    match mode {
        TagMatch::Substring => listing.tags.to_lowercase().contains(&tag),
        TagMatch::Exact => split_tags(&listing.tags)
            .into_iter()
            .any(|t| t.to_lowercase() == tag),
    }
}

/// Listings passing both criteria, in catalog order.
pub fn filter_listings<'a>(
    catalog: &'a [Listing],
    query: &str,
    tag: &TagFilter,
    mode: TagMatch,
) -> Vec<&'a Listing> {
    catalog
        .iter()
        .filter(|l| name_matches(l, query))
        .filter(|l| tag_matches(l, tag, mode))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing cached and no fresh result yet.
    Loading,
    Cached,
    Fresh,
    /// The fetch failed; whatever was cached is still shown.
    Failed(String),
}

/// Marketplace browsing state. Every setter recomputes the visible subset
/// from the full catalog; nothing here talks to the store.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Vec<Listing>,
    query: String,
    tag: TagFilter,
    tag_match: TagMatch,
    visible: Vec<usize>,
    state: LoadState,
}

impl CatalogView {
    pub fn new(tag_match: TagMatch) -> Self {
        Self {
            catalog: Vec::new(),
            query: String::new(),
            tag: TagFilter::All,
            tag_match,
            visible: Vec::new(),
            state: LoadState::Loading,
        }
    }

    pub fn replace_catalog(&mut self, catalog: Vec<Listing>, state: LoadState) {
        self.catalog = catalog;
        self.state = state;
        self.recompute();
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.recompute();
    }

    pub fn set_tag(&mut self, tag: TagFilter) {
        self.tag = tag;
        self.recompute();
    }

    pub fn set_state(&mut self, state: LoadState) {
        self.state = state;
    }

    fn recompute(&mut self) {
        self.visible = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, l)| name_matches(l, &self.query) && tag_matches(l, &self.tag, self.tag_match))
            .map(|(i, _)| i)
            .collect();
    }

    pub fn visible(&self) -> impl Iterator<Item = &Listing> + '_ {
        self.visible.iter().filter_map(|&i| self.catalog.get(i))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn catalog(&self) -> &[Listing] {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tag(&self) -> &TagFilter {
        &self.tag
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }
}
