// src/forms/listing.rs
use crate::domain::listing::{join_tags, split_tags, MAX_DESCRIPTION_CHARS, MAX_PHONE_DIGITS};
use crate::domain::tags::canonical_tag;
use crate::domain::{Condition, Listing, ListingDraft};
use crate::forms::{FormData, FormErrors};
use crate::images::validate_data_url;

/// Raw add/edit form state, exactly as typed. Re-rendered on failure so
/// nothing the user entered is lost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub original_price: String,
    pub location: String,
    pub condition: String,
    pub phone: String,
    pub tags: Vec<String>,
    /// Inline `data:` URL produced in the browser; empty on edit keeps the old image.
    pub image: String,
}

impl ListingForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.get("name").to_string(),
            description: form.get("description").to_string(),
            price: form.get("price").to_string(),
            original_price: form.get("original_price").to_string(),
            location: form.get("location").to_string(),
            condition: form.get("condition").to_string(),
            phone: form.get("phone").to_string(),
            tags: form.get_all("tags").into_iter().map(str::to_string).collect(),
            image: form.get("image").to_string(),
        }
    }

    /// Prefill for the edit page.
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            name: listing.name.clone(),
            description: listing.description.clone(),
            price: listing.price.to_string(),
            original_price: listing
                .original_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            location: listing.location.clone(),
            condition: listing.condition.as_str().to_string(),
            phone: listing.phone.clone().unwrap_or_default(),
            tags: split_tags(&listing.tags).into_iter().map(str::to_string).collect(),
            image: String::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn condition_or_default(&self) -> Condition {
        self.condition.parse().unwrap_or_default()
    }

    /// Presence and type checks only; `original_price` is not compared with
    /// `price`.
    pub fn validate(&self, image_required: bool) -> Result<ListingDraft, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Product name is required");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.add("description", "Description is required");
        } else if description.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.add(
                "description",
                format!("Description must be at most {MAX_DESCRIPTION_CHARS} characters"),
            );
        }

        let price = match parse_amount(&self.price) {
            Some(p) if p > 0.0 => p,
            Some(_) => {
                errors.add("price", "Price must be greater than 0");
                0.0
            }
            None => {
                errors.add("price", "Price must be a number");
                0.0
            }
        };

        let original_price = if self.original_price.trim().is_empty() {
            None
        } else {
            match parse_amount(&self.original_price) {
                Some(p) if p > 0.0 => Some(p),
                _ => {
                    errors.add("original_price", "Original price must be a positive number");
                    None
                }
            }
        };

        let location = self.location.trim();
        if location.is_empty() {
            errors.add("location", "Location is required");
        }

        let condition = if self.condition.trim().is_empty() {
            Condition::default()
        } else {
            match self.condition.parse() {
                Ok(c) => c,
                Err(_) => {
                    errors.add("condition", "Choose one of New, Like New, Good or Fair");
                    Condition::default()
                }
            }
        };

        let phone = self.phone.trim();
        let phone = if phone.is_empty() {
            None
        } else if !phone.chars().all(|c| c.is_ascii_digit()) {
            errors.add("phone", "Phone number may only contain digits");
            None
        } else if phone.len() > MAX_PHONE_DIGITS {
            errors.add(
                "phone",
                format!("Phone number must be at most {MAX_PHONE_DIGITS} digits"),
            );
            None
        } else {
            Some(phone.to_string())
        };

        let mut tags: Vec<&str> = Vec::new();
        for raw in &self.tags {
            match canonical_tag(raw) {
                Some(t) if !tags.contains(&t) => tags.push(t),
                Some(_) => {}
                None => errors.add("tags", format!("Unknown tag: {raw}")),
            }
        }

        let image = self.image.trim();
        let image = if image.is_empty() {
            if image_required {
                errors.add("image", "Product image is required");
            }
            None
        } else {
            match validate_data_url(image) {
                Ok(_) => Some(image.to_string()),
                Err(msg) => {
                    errors.add("image", msg);
                    None
                }
            }
        };

        errors.into_result(ListingDraft {
            name: name.to_string(),
            description: description.to_string(),
            price,
            original_price,
            location: location.to_string(),
            condition,
            phone,
            tags: join_tags(&tags),
            image,
        })
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
