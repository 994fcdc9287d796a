//! Catalog service
//!
//! Admin-facing operations over the fabric catalog and manufacturer accounts.

use std::sync::Arc;

use crate::domain::entities::{Fabric, FabricId, FabricPatch, FabricStatus, Role, User};
use crate::domain::ports::{FabricRepository, UserRepository};
use crate::error::AppError;

/// Service for managing the fabric catalog
pub struct CatalogService {
    fabrics: Arc<dyn FabricRepository>,
    users: Arc<dyn UserRepository>,
}

impl CatalogService {
    pub fn new(fabrics: Arc<dyn FabricRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { fabrics, users }
    }

    /// List fabrics, optionally narrowed to a single status, in id order.
    pub async fn list_fabrics(
        &self,
        status: Option<FabricStatus>,
    ) -> Result<Vec<Fabric>, AppError> {
        let fabrics = self.fabrics.list(status).await?;
        Ok(fabrics)
    }

    /// Apply a partial update to a fabric and return the stored result.
    pub async fn update_fabric(
        &self,
        id: &FabricId,
        patch: &FabricPatch,
    ) -> Result<Fabric, AppError> {
        let fabric = self.fabrics.update(id, patch).await?;
        tracing::info!(fabric_id = %fabric.id, status = %fabric.status, "fabric updated");
        Ok(fabric)
    }

    /// List all manufacturer accounts in id order.
    pub async fn list_mills(&self) -> Result<Vec<User>, AppError> {
        let mills = self.users.find_by_role(Role::Manufacturer).await?;
        Ok(mills)
    }
}
