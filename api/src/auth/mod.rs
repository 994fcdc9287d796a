//! Authentication and authorization
//!
//! Token signing/verification and the bearer-token middleware that guards
//! the admin routes.

pub mod middleware;
pub mod token;

pub use middleware::admin_auth_middleware;
pub use token::TokenSigner;
