// src/handlers/listings.rs
use chrono::Utc;
use tracing::{info, warn};

use crate::app::App;
use crate::auth::sessions::SessionUser;
use crate::db::ProductStore;
use crate::domain::{Listing, ListingId, NewListing};
use crate::errors::ServerError;
use crate::forms::listing::ListingForm;
use crate::forms::FormData;
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::templates::pages::{delete_confirm_page, listing_form_page, product_page, FormMode};
use crate::templates::PageCtx;

const PUBLISHED: &str = "Listing published! It is now visible in the marketplace.";

fn find(app: &App, id: ListingId) -> Result<Listing, ServerError> {
    app.db.select_by_id(id)?.ok_or(ServerError::NotFound)
}

fn find_owned(app: &App, id: ListingId, user: &SessionUser) -> Result<Listing, ServerError> {
    let listing = find(app, id)?;
    if !listing.is_owned_by(&user.email) {
        return Err(ServerError::Forbidden(
            "You can only change your own listings.".into(),
        ));
    }
    Ok(listing)
}

pub fn product(app: &App, ctx: PageCtx<'_>, id: ListingId) -> ResultResp {
    let listing = find(app, id)?;
    let wishlisted = ctx
        .user
        .map(|u| app.wishlist_for(u).contains(id))
        .unwrap_or(false);
    html_response(product_page(ctx, &listing, wishlisted))
}

pub fn add_form(ctx: PageCtx<'_>) -> ResultResp {
    html_response(listing_form_page(
        ctx,
        FormMode::Add,
        &ListingForm::default(),
        None,
        None,
        None,
    ))
}

pub fn add_submit(app: &App, ctx: PageCtx<'_>, user: &SessionUser, form: &FormData) -> ResultResp {
    let input = ListingForm::from_form(form);
    let mut draft = match input.validate(true) {
        Ok(draft) => draft,
        Err(errors) => {
            return html_response_with_status(
                422,
                listing_form_page(ctx, FormMode::Add, &input, Some(&errors), None, None),
            )
        }
    };
    let image = draft
        .image
        .take()
        .ok_or_else(|| ServerError::BadRequest("Product image is required".into()))?;

    let record = NewListing::from_draft(draft, image, &user.email, Utc::now());
    match app.db.insert(&record) {
        Ok(created) => {
            info!(product_id = created.id, owner = %user.email, "listing published");
            html_response(listing_form_page(
                ctx,
                FormMode::Add,
                &ListingForm::default(),
                None,
                Some(PUBLISHED),
                None,
            ))
        }
        Err(e) => {
            warn!(error = %e, "insert failed; keeping form");
            html_response_with_status(
                e.status(),
                listing_form_page(ctx, FormMode::Add, &input, None, None, Some(&e.user_message())),
            )
        }
    }
}

pub fn edit_form(app: &App, ctx: PageCtx<'_>, user: &SessionUser, id: ListingId) -> ResultResp {
    let listing = find_owned(app, id, user)?;
    html_response(listing_form_page(
        ctx,
        FormMode::Edit(id),
        &ListingForm::from_listing(&listing),
        None,
        None,
        None,
    ))
}

pub fn edit_submit(
    app: &App,
    ctx: PageCtx<'_>,
    user: &SessionUser,
    id: ListingId,
    form: &FormData,
) -> ResultResp {
    let input = ListingForm::from_form(form);
    let draft = match input.validate(false) {
        Ok(draft) => draft,
        Err(errors) => {
            return html_response_with_status(
                422,
                listing_form_page(ctx, FormMode::Edit(id), &input, Some(&errors), None, None),
            )
        }
    };

    match app.db.update(id, &user.email, &draft) {
        Ok(_) => redirect("/profile"),
        Err(e @ ServerError::DbError(_)) => {
            warn!(product_id = id, error = %e, "update failed; keeping form");
            html_response_with_status(
                e.status(),
                listing_form_page(ctx, FormMode::Edit(id), &input, None, None, Some(&e.user_message())),
            )
        }
        Err(e) => Err(e),
    }
}

/// First POST asks for confirmation; only `confirmed=true` deletes.
pub fn delete(
    app: &App,
    ctx: PageCtx<'_>,
    user: &SessionUser,
    id: ListingId,
    form: &FormData,
) -> ResultResp {
    if form.get("confirmed") != "true" {
        let listing = find_owned(app, id, user)?;
        return html_response(delete_confirm_page(ctx, &listing));
    }

    app.db.delete(id, &user.email)?;
    redirect("/profile")
}
