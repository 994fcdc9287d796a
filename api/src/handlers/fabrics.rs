//! Fabric catalog handlers

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Fabric, FabricId, FabricPatch, FabricStatus, Metadata};
use crate::error::{AppError, DomainError};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListFabricsQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFabricRequest {
    pub status: Option<String>,
    pub meta_data: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize)]
pub struct FabricResponse {
    pub id: i32,
    #[serde(rename = "ref")]
    pub ref_code: String,
    pub fabric_group: String,
    pub fabrication: String,
    pub gsm: i32,
    pub width: String,
    pub composition: String,
    pub status: FabricStatus,
    pub manufacturer_id: i32,
    pub meta_data: Metadata,
    pub created_at: String,
}

impl From<Fabric> for FabricResponse {
    fn from(fabric: Fabric) -> Self {
        Self {
            id: fabric.id.0,
            ref_code: fabric.ref_code,
            fabric_group: fabric.fabric_group,
            fabrication: fabric.fabrication,
            gsm: fabric.gsm,
            width: fabric.width,
            composition: fabric.composition,
            status: fabric.status,
            manufacturer_id: fabric.manufacturer_id.0,
            meta_data: fabric.meta_data,
            created_at: fabric.created_at.to_rfc3339(),
        }
    }
}

/// Status strings are parsed here rather than in serde so an unknown value
/// comes back as a 400 naming the field, not a deserialization rejection.
fn parse_status(raw: &str) -> Result<FabricStatus, AppError> {
    raw.parse::<FabricStatus>()
        .map_err(|e| AppError::Domain(DomainError::Validation(e)))
}

/// GET /api/admin/fabrics?status=...
pub async fn list_fabrics(
    State(state): State<AppState>,
    Query(query): Query<ListFabricsQuery>,
) -> Result<Json<Vec<FabricResponse>>, AppError> {
    let status = query.status.as_deref().map(parse_status).transpose()?;

    let fabrics = state.catalog_service.list_fabrics(status).await?;
    Ok(Json(fabrics.into_iter().map(FabricResponse::from).collect()))
}

/// PUT /api/admin/fabric/:id
pub async fn update_fabric(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateFabricRequest>,
) -> Result<Json<FabricResponse>, AppError> {
    let patch = FabricPatch {
        status: request.status.as_deref().map(parse_status).transpose()?,
        meta_data: request.meta_data.map(Metadata),
    };

    let fabric = state
        .catalog_service
        .update_fabric(&FabricId(id), &patch)
        .await?;

    Ok(Json(FabricResponse::from(fabric)))
}
