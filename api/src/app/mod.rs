//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod auth_service;
pub mod catalog_service;

pub use auth_service::{hash_password, AuthService};
pub use catalog_service::CatalogService;
