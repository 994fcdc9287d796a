//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod fabric;
pub mod user;

pub use fabric::{Fabric, FabricId, FabricPatch, FabricStatus, Metadata};
pub use user::{Role, User, UserId};
