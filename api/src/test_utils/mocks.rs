//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Fabric, FabricId, FabricPatch, FabricStatus, Role, User, UserId};
use crate::domain::ports::{FabricRepository, UserRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        {
            let mut users = self.users.write().unwrap();
            users.insert(user.id, user);
        }
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_role(&self, role: Role) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().unwrap();
        let mut matching: Vec<User> = users.values().filter(|u| u.role == role).cloned().collect();
        matching.sort_by_key(|u| u.id.0);
        Ok(matching)
    }
}

// ============================================================================
// In-Memory Fabric Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryFabricRepository {
    fabrics: Arc<RwLock<HashMap<FabricId, Fabric>>>,
}

impl InMemoryFabricRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a fabric for testing.
    ///
    /// Reassigns the id when it collides with a fabric already stored, so
    /// chained `with_fabric` calls never silently overwrite each other.
    pub fn with_fabric(self, mut fabric: Fabric) -> Self {
        {
            let mut fabrics = self.fabrics.write().unwrap();
            if fabrics.contains_key(&fabric.id) {
                let next_id = fabrics.keys().map(|id| id.0).max().unwrap_or(0) + 1;
                fabric.id = FabricId(next_id);
            }
            fabrics.insert(fabric.id, fabric);
        }
        self
    }
}

#[async_trait]
impl FabricRepository for InMemoryFabricRepository {
    async fn list(&self, status: Option<FabricStatus>) -> Result<Vec<Fabric>, DomainError> {
        let fabrics = self.fabrics.read().unwrap();
        let mut matching: Vec<Fabric> = fabrics
            .values()
            .filter(|f| status.map_or(true, |s| f.status == s))
            .cloned()
            .collect();
        matching.sort_by_key(|f| f.id.0);
        Ok(matching)
    }

    async fn update(&self, id: &FabricId, patch: &FabricPatch) -> Result<Fabric, DomainError> {
        let mut fabrics = self.fabrics.write().unwrap();
        let fabric = fabrics
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Fabric {} not found", id)))?;

        if let Some(status) = patch.status {
            fabric.status = status;
        }
        if let Some(meta_patch) = &patch.meta_data {
            fabric.meta_data.merge(meta_patch);
        }

        Ok(fabric.clone())
    }
}
