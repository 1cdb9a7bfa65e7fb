// src/domain/tags.rs

/// Fixed vocabulary offered by the listing form.
pub const TAG_OPTIONS: [&str; 7] = [
    "Books",
    "Electronics",
    "Games",
    "Home",
    "Furniture",
    "Appliances",
    "Fashion",
];

/// Buttons shown above the marketplace grid. "ALL" is the no-filter sentinel.
pub const FILTER_TAGS: [&str; 5] = ["ALL", "Books", "Games", "Electronics", "Home"];

pub const ALL_SENTINEL: &str = "ALL";

/// Canonical spelling of a vocabulary tag, matched case-insensitively.
pub fn canonical_tag(tag: &str) -> Option<&'static str> {
    let tag = tag.trim();
    TAG_OPTIONS
        .iter()
        .copied()
        .find(|t| t.eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_tag_ignores_case_and_spaces() {
        assert_eq!(canonical_tag(" books "), Some("Books"));
        assert_eq!(canonical_tag("FASHION"), Some("Fashion"));
        assert_eq!(canonical_tag("Game"), None);
    }
}
