use std::time::Duration;

use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_app, test_app_with};

#[test]
fn invalid_payment_reports_every_field() {
    let (_dir, app) = test_app();
    let resp = handle(
        post_form(
            "/payment",
            &[
                ("card_name", ""),
                ("card_number", "4242 42"),
                ("expiry_date", "1"),
                ("cvv", "12"),
                ("amount", ""),
            ],
            None,
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Name on card is required"));
    assert!(body.contains("Card number must be 16 digits"));
    assert!(body.contains("Invalid format (MM/YY)"));
    assert!(body.contains("CVV must be 3-4 digits"));
    assert!(body.contains("Amount is required"));
    // formatted input is echoed back
    assert!(body.contains(r#"value="4242 42""#));
}

const VALID_CARD: [(&str, &str); 5] = [
    ("card_name", "Ada Lovelace"),
    ("card_number", "4242424242424242"),
    ("expiry_date", "1229"),
    ("cvv", "123"),
    ("amount", "24.50"),
];

#[test]
fn valid_payment_shows_processing_then_confirms() {
    let (_dir, app) = test_app_with(|cfg| cfg.payment_delay = Duration::from_secs(5));
    let resp = handle(post_form("/payment", &VALID_CARD, None), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Processing payment"));
    assert!(body.contains(r#"hx-trigger="load delay:5000ms""#));
    assert!(!body.contains("Payment successful"));

    let resp = handle(post_form("/payment/complete", &VALID_CARD, None), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Payment successful"));
    assert!(body.contains("$24.50"));
}

#[test]
fn confirmation_requires_a_valid_card() {
    let (_dir, app) = test_app();
    let mut fields = VALID_CARD;
    fields[3] = ("cvv", "1");
    let resp = handle(post_form("/payment/complete", &fields, None), &app).unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("CVV must be 3-4 digits"));
    assert!(!body.contains("Payment successful"));
}

#[test]
fn buy_now_prefills_amount() {
    let (_dir, app) = test_app();
    let body = body_string(handle(get("/payment?amount=%2418.75", None), &app).unwrap());
    assert!(body.contains(r#"value="18.75""#));
}
