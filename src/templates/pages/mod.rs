pub mod check_email;
pub mod delete_confirm;
pub mod home;
pub mod listing_form;
pub mod marketplace;
pub mod payment;
pub mod policies;
pub mod product;
pub mod profile;
pub mod signin;

pub use check_email::{check_email_content, request_failed_content};
pub use delete_confirm::delete_confirm_page;
pub use home::home_page;
pub use listing_form::{listing_form_page, FormMode};
pub use marketplace::{marketplace_page, results_partial};
pub use payment::{payment_page, payment_processing_page, payment_success_page};
pub use policies::{privacy_page, tos_page};
pub use product::product_page;
pub use profile::profile_page;
pub use signin::signin_page;
