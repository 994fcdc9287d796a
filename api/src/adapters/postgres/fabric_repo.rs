//! PostgreSQL adapter for FabricRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::entities::{Fabric, FabricId, FabricPatch, FabricStatus, Metadata, UserId};
use crate::domain::ports::FabricRepository;
use crate::entity::fabrics;
use crate::error::DomainError;

/// PostgreSQL implementation of FabricRepository
pub struct PostgresFabricRepository {
    db: DatabaseConnection,
}

impl PostgresFabricRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FabricRepository for PostgresFabricRepository {
    async fn list(&self, status: Option<FabricStatus>) -> Result<Vec<Fabric>, DomainError> {
        let mut query = fabrics::Entity::find();
        if let Some(status) = status {
            query = query.filter(fabrics::Column::Status.eq(status.to_string()));
        }

        let results = query
            .order_by_asc(fabrics::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Fabric::try_from).collect()
    }

    async fn update(&self, id: &FabricId, patch: &FabricPatch) -> Result<Fabric, DomainError> {
        // Single transaction so the metadata merge cannot lose keys under
        // concurrent admin edits of the same fabric.
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let model = fabrics::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Fabric {} not found", id)))?;

        if patch.is_empty() {
            txn.commit()
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;
            return Fabric::try_from(model);
        }

        let mut stored_meta: Metadata = serde_json::from_value(model.meta_data.clone())
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut active: fabrics::ActiveModel = model.into();

        if let Some(status) = patch.status {
            active.status = Set(status.to_string());
        }

        if let Some(meta_patch) = &patch.meta_data {
            stored_meta.merge(meta_patch);
            active.meta_data = Set(serde_json::to_value(&stored_meta)
                .map_err(|e| DomainError::Internal(e.to_string()))?);
        }

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Fabric::try_from(updated)
    }
}

/// Convert SeaORM model to domain entity.
///
/// Unrecognized status strings and malformed metadata JSON indicate rows
/// written outside the application; surface them instead of defaulting.
impl TryFrom<fabrics::Model> for Fabric {
    type Error = DomainError;

    fn try_from(model: fabrics::Model) -> Result<Self, Self::Error> {
        let status: FabricStatus = model
            .status
            .parse()
            .map_err(|e: String| DomainError::Internal(e))?;

        let meta_data: Metadata = serde_json::from_value(model.meta_data)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(Fabric {
            id: FabricId(model.id),
            ref_code: model.ref_code,
            fabric_group: model.fabric_group,
            fabrication: model.fabrication,
            gsm: model.gsm,
            width: model.width,
            composition: model.composition,
            status,
            manufacturer_id: UserId(model.manufacturer_id),
            meta_data,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        })
    }
}
