use maud::{html, Markup};

use crate::domain::listing::format_price;
use crate::forms::payment::PaymentForm;
use crate::forms::FormErrors;
use crate::templates::components::{field_error, notice};
use crate::templates::{desktop_layout, PageCtx};

/// Simulated checkout. `product` is the (id, name) the buyer came from, if any.
pub fn payment_page(
    ctx: PageCtx<'_>,
    form: &PaymentForm,
    errors: Option<&FormErrors>,
    product: Option<(i64, &str)>,
) -> Markup {
    desktop_layout(
        ctx,
        "Payment",
        html! {
            main class="container narrow" {
                h1 { "Payment" }
                @if let Some((_, name)) = product {
                    p class="lead" { "Paying for " strong { (name) } }
                }
                (notice("info", "This is a demo checkout. No card is charged."))

                form method="post" action="/payment" class="payment-form" hx-disabled-elt="button" {
                    @if let Some((id, _)) = product {
                        input type="hidden" name="product" value=(id);
                    }

                    label for="card_name" { "Name on card" }
                    input type="text" id="card_name" name="card_name" autocomplete="cc-name" value=(form.card_name);
                    (field_error(errors, "card_name"))

                    label for="card_number" { "Card number" }
                    input type="text" id="card_number" name="card_number" inputmode="numeric"
                        autocomplete="cc-number" maxlength="19" placeholder="1234 5678 9012 3456"
                        value=(form.card_number);
                    (field_error(errors, "card_number"))

                    div class="row" {
                        div {
                            label for="expiry_date" { "Expiry" }
                            input type="text" id="expiry_date" name="expiry_date" inputmode="numeric"
                                autocomplete="cc-exp" maxlength="5" placeholder="MM/YY" value=(form.expiry_date);
                            (field_error(errors, "expiry_date"))
                        }
                        div {
                            label for="cvv" { "CVV" }
                            input type="password" id="cvv" name="cvv" inputmode="numeric"
                                autocomplete="cc-csc" maxlength="4" value=(form.cvv);
                            (field_error(errors, "cvv"))
                        }
                    }

                    label for="amount" { "Amount ($)" }
                    input type="text" id="amount" name="amount" inputmode="decimal" value=(form.amount);
                    (field_error(errors, "amount"))

                    button type="submit" class="primary" { "Pay" }
                }
            }
        },
    )
}

/// Shown after the card form validates. The confirmation is requested by the
/// browser once `delay_ms` has passed, so no server worker waits.
pub fn payment_processing_page(
    ctx: PageCtx<'_>,
    form: &PaymentForm,
    amount: f64,
    delay_ms: u128,
) -> Markup {
    let trigger = format!("load delay:{delay_ms}ms");
    desktop_layout(
        ctx,
        "Processing payment",
        html! {
            main class="container narrow text-center" {
                h1 { "Processing payment" }
                p class="lead" aria-busy="true" { "Processing " strong { (format_price(amount)) } "..." }
                form method="post" action="/payment/complete"
                    hx-post="/payment/complete" hx-trigger=(trigger)
                    hx-select="main" hx-target="closest main" hx-swap="outerHTML" {
                    input type="hidden" name="card_name" value=(form.card_name);
                    input type="hidden" name="card_number" value=(form.card_number);
                    input type="hidden" name="expiry_date" value=(form.expiry_date);
                    input type="hidden" name="cvv" value=(form.cvv);
                    input type="hidden" name="amount" value=(form.amount);
                    noscript { button type="submit" class="primary" { "Continue" } }
                }
            }
        },
    )
}

pub fn payment_success_page(ctx: PageCtx<'_>, amount: f64) -> Markup {
    desktop_layout(
        ctx,
        "Payment complete",
        html! {
            main class="container narrow text-center" {
                h1 { "Payment successful" }
                p class="lead" { "You paid " strong { (format_price(amount)) } "." }
                p class="muted" { "Nothing was actually charged." }
                a href="/marketplace" class="button primary" { "Back to marketplace" }
            }
        },
    )
}
