// src/handlers/wishlist.rs
use crate::app::App;
use crate::auth::sessions::SessionUser;
use crate::db::ProductStore;
use crate::domain::ListingId;
use crate::errors::ServerError;
use crate::responses::{redirect, ResultResp};

pub fn toggle(app: &App, user: &SessionUser, id: ListingId) -> ResultResp {
    let listing = app.db.select_by_id(id)?.ok_or(ServerError::NotFound)?;
    app.wishlist_for(user).toggle(&listing)?;
    redirect(&format!("/product/{id}"))
}

pub fn remove(app: &App, user: &SessionUser, id: ListingId) -> ResultResp {
    app.wishlist_for(user).remove(id)?;
    redirect("/profile")
}
