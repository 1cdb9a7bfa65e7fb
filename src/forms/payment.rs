// src/forms/payment.rs
use crate::forms::{FormData, FormErrors};

/// Digits only; once there are four or more, keep the first 16 and group
/// them in fours.
pub fn format_card_number(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return value.to_string();
    }
    digits
        .chars()
        .take(16)
        .collect::<Vec<_>>()
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// "1225" -> "12/25"; fewer than two digits come back as typed digits.
pub fn format_expiry_date(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        let month = &digits[..2];
        let year: String = digits[2..].chars().take(2).collect();
        format!("{month}/{year}")
    } else {
        digits
    }
}

/// Keep digits and the first '.'.
pub fn sanitize_amount(value: &str) -> String {
    let mut seen_dot = false;
    value
        .chars()
        .filter(|&c| {
            if c == '.' {
                !std::mem::replace(&mut seen_dot, true)
            } else {
                c.is_ascii_digit()
            }
        })
        .collect()
}

/// The card form after input formatting. Nothing here is ever charged or
/// stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub amount: String,
}

impl PaymentForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            card_name: form.get("card_name").to_string(),
            card_number: format_card_number(form.get("card_number")),
            expiry_date: format_expiry_date(form.get("expiry_date")),
            cvv: form
                .get("cvv")
                .chars()
                .filter(|c| c.is_ascii_digit())
                .take(4)
                .collect(),
            amount: sanitize_amount(form.get("amount")),
        }
    }

    pub fn validate(&self) -> Result<f64, FormErrors> {
        let mut errors = FormErrors::default();

        if self.card_name.trim().is_empty() {
            errors.add("card_name", "Name on card is required");
        }

        let card_digits = self.card_number.chars().filter(|c| !c.is_whitespace()).count();
        if self.card_number.trim().is_empty() {
            errors.add("card_number", "Card number is required");
        } else if card_digits != 16 || !self.card_number.chars().all(|c| c.is_ascii_digit() || c == ' ') {
            errors.add("card_number", "Card number must be 16 digits");
        }

        if self.expiry_date.trim().is_empty() {
            errors.add("expiry_date", "Expiry date is required");
        } else if !is_expiry_shape(&self.expiry_date) {
            errors.add("expiry_date", "Invalid format (MM/YY)");
        }

        if self.cvv.trim().is_empty() {
            errors.add("cvv", "CVV is required");
        } else if !(3..=4).contains(&self.cvv.len()) || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            errors.add("cvv", "CVV must be 3-4 digits");
        }

        let amount = if self.amount.trim().is_empty() {
            errors.add("amount", "Amount is required");
            0.0
        } else {
            match self.amount.parse::<f64>() {
                Ok(a) if a.is_finite() && a > 0.0 => a,
                _ => {
                    errors.add("amount", "Please enter a valid amount");
                    0.0
                }
            }
        };

        errors.into_result(amount)
    }
}

// MM/YY by shape only; the month is not range-checked.
fn is_expiry_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[2] == b'/'
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[3..].iter().all(u8::is_ascii_digit)
}
