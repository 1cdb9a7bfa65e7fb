pub mod auth;
pub mod listings;
pub mod marketplace;
pub mod pages;
pub mod payment;
pub mod profile;
pub mod wishlist;

use crate::auth::sessions::SessionUser;
use crate::errors::ServerError;
use crate::responses::{redirect, ResultResp};

/// Runs `f` for a signed-in user; everyone else is sent to the sign-in page.
pub fn signed_in<F>(user: Option<&SessionUser>, f: F) -> ResultResp
where
    F: FnOnce(&SessionUser) -> ResultResp,
{
    match user {
        Some(user) => f(user),
        None => redirect("/signin"),
    }
}

pub fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}
