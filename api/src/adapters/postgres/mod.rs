//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod fabric_repo;
pub mod user_repo;

pub use fabric_repo::PostgresFabricRepository;
pub use user_repo::PostgresUserRepository;
