//! Manufacturer account handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::User;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MillResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for MillResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.0,
            name: user.company_name,
            email: user.email,
        }
    }
}

/// GET /api/admin/mills
pub async fn list_mills(
    State(state): State<AppState>,
) -> Result<Json<Vec<MillResponse>>, AppError> {
    let mills = state.catalog_service.list_mills().await?;
    Ok(Json(mills.into_iter().map(MillResponse::from).collect()))
}
