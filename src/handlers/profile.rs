// src/handlers/profile.rs
use crate::app::App;
use crate::auth::sessions::SessionUser;
use crate::db::ProductStore;
use crate::responses::{html_response, ResultResp};
use crate::templates::pages::profile_page;
use crate::templates::PageCtx;

pub fn profile(app: &App, ctx: PageCtx<'_>, user: &SessionUser) -> ResultResp {
    let listings = app.db.select_by_owner(&user.email)?;
    let catalog = app.db.select_all()?;
    let wishlist = app.wishlist_for(user).reconcile(&catalog)?;
    html_response(profile_page(ctx, &user.email, &listings, &wishlist))
}
