//! HTTP request handlers

pub mod auth;
pub mod fabrics;
pub mod mills;

pub use auth::login;
pub use fabrics::{list_fabrics, update_fabric};
pub use mills::list_mills;
