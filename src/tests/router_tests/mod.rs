mod auth_flow_tests;
mod listing_tests;
mod marketplace_tests;
mod payment_tests;
mod wishlist_tests;
