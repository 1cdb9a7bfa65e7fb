// src/handlers/payment.rs
use tracing::info;

use crate::app::App;
use crate::db::ProductStore;
use crate::domain::Listing;
use crate::errors::ServerError;
use crate::forms::payment::{sanitize_amount, PaymentForm};
use crate::forms::{FormData, FormErrors};
use crate::responses::{html_response, html_response_with_status, ResultResp};
use crate::templates::pages::{payment_page, payment_processing_page, payment_success_page};
use crate::templates::PageCtx;

/// The listing named by `product`, if it still exists.
fn product_for(app: &App, form: &FormData) -> Result<Option<Listing>, ServerError> {
    match form.get("product").parse::<i64>() {
        Ok(id) => app.db.select_by_id(id),
        Err(_) => Ok(None),
    }
}

pub fn form(app: &App, ctx: PageCtx<'_>, query: &FormData) -> ResultResp {
    let product = product_for(app, query)?;
    let prefill = PaymentForm {
        amount: sanitize_amount(query.get("amount")),
        ..PaymentForm::default()
    };
    html_response(payment_page(
        ctx,
        &prefill,
        None,
        product.as_ref().map(|l| (l.id, l.name.as_str())),
    ))
}

fn invalid(
    app: &App,
    ctx: PageCtx<'_>,
    form: &FormData,
    input: &PaymentForm,
    errors: &FormErrors,
) -> ResultResp {
    let product = product_for(app, form)?;
    html_response_with_status(
        422,
        payment_page(
            ctx,
            input,
            Some(errors),
            product.as_ref().map(|l| (l.id, l.name.as_str())),
        ),
    )
}

/// Validates and hands back a processing page; the browser asks for the
/// confirmation after the configured delay.
pub fn submit(app: &App, ctx: PageCtx<'_>, form: &FormData) -> ResultResp {
    let input = PaymentForm::from_form(form);
    match input.validate() {
        Ok(amount) => html_response(payment_processing_page(
            ctx,
            &input,
            amount,
            app.config.payment_delay.as_millis(),
        )),
        Err(errors) => invalid(app, ctx, form, &input, &errors),
    }
}

/// Re-checks the card fields and confirms. Nothing is charged.
pub fn complete(app: &App, ctx: PageCtx<'_>, form: &FormData) -> ResultResp {
    let input = PaymentForm::from_form(form);
    match input.validate() {
        Ok(amount) => {
            info!(amount, "simulated payment accepted");
            html_response(payment_success_page(ctx, amount))
        }
        Err(errors) => invalid(app, ctx, form, &input, &errors),
    }
}
