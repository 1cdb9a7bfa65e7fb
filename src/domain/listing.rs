// src/domain/listing.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type ListingId = i64;

pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_PHONE_DIGITS: usize = 15;

/// Physical condition of a listed item, serialised as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Fair,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown condition: {s}"))
    }
}

/// A single marketplace product record as stored in `products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub location: String,
    pub condition: Condition,
    pub phone: Option<String>,
    /// Comma-joined tag labels, e.g. "Books,Games".
    pub tags: String,
    /// Inline `data:` URL.
    pub image: String,
    pub listed_date: DateTime<Utc>,
    /// Email of the user who created the listing.
    pub owner: String,
}

impl Listing {
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(&self.tags)
    }

    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner.eq_ignore_ascii_case(email)
    }
}

/// Fields the user controls, shared by the add and edit flows.
/// `image` is `None` on edit when the existing image should be kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub location: String,
    pub condition: Condition,
    pub phone: Option<String>,
    pub tags: String,
    pub image: Option<String>,
}

/// A record ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub location: String,
    pub condition: Condition,
    pub phone: Option<String>,
    pub tags: String,
    pub image: String,
    pub listed_date: DateTime<Utc>,
    pub owner: String,
}

impl NewListing {
    pub fn from_draft(
        draft: ListingDraft,
        image: String,
        owner: &str,
        listed_date: DateTime<Utc>,
    ) -> Self {
        Self {
            name: draft.name,
            description: draft.description,
            price: draft.price,
            original_price: draft.original_price,
            location: draft.location,
            condition: draft.condition,
            phone: draft.phone,
            tags: draft.tags,
            image,
            listed_date,
            owner: owner.to_string(),
        }
    }
}

pub fn split_tags(joined: &str) -> Vec<&str> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn discount_percent(price: f64, original_price: Option<f64>) -> Option<i64> {
    let original = original_price?;
    if original > price && original > 0.0 {
        Some(((1.0 - price / original) * 100.0).round() as i64)
    } else {
        None
    }
}

/// "$1,299" or "$24.50"; whole amounts drop the cents.
pub fn format_price(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = (cents % 100).abs();

    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if cents < 0 { "-" } else { "" };
    if frac == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{frac:02}")
    }
}
