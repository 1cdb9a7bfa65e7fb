pub mod auth;
pub mod connection;
pub mod magic_auth;
pub mod products;

pub use connection::Database;
pub use products::ProductStore;
