//! Fabric domain entity
//!
//! A catalog item representing a textile product with technical attributes
//! and a review status. Fabrics are submitted by manufacturers and reviewed
//! by administrators.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Unique identifier for a fabric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FabricId(pub i32);

impl From<i32> for FabricId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FabricId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review status of a fabric listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FabricStatus {
    /// Submitted by a mill, waiting for admin review
    PendingReview,
    /// Approved and visible in the public catalog
    Live,
    /// Rejected during review
    Rejected,
}

impl std::fmt::Display for FabricStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FabricStatus::PendingReview => write!(f, "PENDING_REVIEW"),
            FabricStatus::Live => write!(f, "LIVE"),
            FabricStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

impl std::str::FromStr for FabricStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING_REVIEW" => Ok(FabricStatus::PendingReview),
            "LIVE" => Ok(FabricStatus::Live),
            "REJECTED" => Ok(FabricStatus::Rejected),
            _ => Err(format!("Unknown fabric status: {}", s)),
        }
    }
}

/// Open-ended string-keyed attribute map attached to a fabric
/// (e.g. `"Shrinkage" -> "3%"`).
///
/// Updates merge per key: a key present in the patch overwrites the stored
/// value, keys absent from the patch are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata(pub BTreeMap<String, String>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply a patch per key; existing keys not named in the patch survive.
    pub fn merge(&mut self, patch: &Metadata) {
        for (key, value) in &patch.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A textile product in the catalog
#[derive(Debug, Clone, Serialize)]
pub struct Fabric {
    pub id: FabricId,
    /// Unique business key, e.g. "TEST-001"
    pub ref_code: String,
    pub fabric_group: String,
    pub fabrication: String,
    /// Weight in grams per square meter
    pub gsm: i32,
    pub width: String,
    pub composition: String,
    pub status: FabricStatus,
    /// Owning mill; must reference a user with role=manufacturer
    pub manufacturer_id: UserId,
    pub meta_data: Metadata,
    pub created_at: DateTime<Utc>,
}

/// Partial update applied by an admin review.
///
/// Only supplied fields change: `status` is replaced wholesale, `meta_data`
/// merges per key into the stored map.
#[derive(Debug, Clone, Default)]
pub struct FabricPatch {
    pub status: Option<FabricStatus>,
    pub meta_data: Option<Metadata>,
}

impl FabricPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.meta_data.is_none()
    }
}
