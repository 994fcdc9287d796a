//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Fabric, FabricId, FabricPatch, FabricStatus, Role, User};
use crate::error::DomainError;

/// Repository for User entities
///
/// Account provisioning happens out of band, so there is no create here.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email (unique)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// All users with the given role, id ascending
    async fn find_by_role(&self, role: Role) -> Result<Vec<User>, DomainError>;
}

/// Repository for Fabric entities
#[async_trait]
pub trait FabricRepository: Send + Sync {
    /// All fabrics, optionally filtered by exact status, id ascending
    async fn list(&self, status: Option<FabricStatus>) -> Result<Vec<Fabric>, DomainError>;

    /// Apply a partial update and return the updated fabric.
    ///
    /// The read-modify-write must be atomic: metadata merges per key against
    /// the stored value, so concurrent admin edits must not lose keys.
    async fn update(&self, id: &FabricId, patch: &FabricPatch) -> Result<Fabric, DomainError>;
}
