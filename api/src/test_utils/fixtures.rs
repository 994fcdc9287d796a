//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::app::hash_password;
use crate::domain::entities::{Fabric, FabricId, FabricStatus, Metadata, Role, User, UserId};

/// Create a test admin account with the given password
pub fn test_admin(password: &str) -> User {
    User {
        id: UserId(1),
        email: "admin@test.com".to_string(),
        password_hash: hash_password(password).unwrap(),
        role: Role::Admin,
        company_name: "Admin Corp".to_string(),
        created_at: Utc::now(),
    }
}

/// Create a test manufacturer account
pub fn test_mill() -> User {
    User {
        id: UserId(2),
        email: "mill@test.com".to_string(),
        password_hash: hash_password("millpass").unwrap(),
        role: Role::Manufacturer,
        company_name: "Test Mill".to_string(),
        created_at: Utc::now(),
    }
}

/// Create a test manufacturer with a specific id and company name
pub fn test_mill_named(id: i32, company_name: &str) -> User {
    User {
        id: UserId(id),
        email: format!("mill{}@test.com", id),
        password_hash: hash_password("millpass").unwrap(),
        role: Role::Manufacturer,
        company_name: company_name.to_string(),
        created_at: Utc::now(),
    }
}

/// Create a test fabric with the given reference code and status
pub fn test_fabric(ref_code: &str, status: FabricStatus) -> Fabric {
    Fabric {
        id: FabricId(1),
        ref_code: ref_code.to_string(),
        fabric_group: "Test Group".to_string(),
        fabrication: "Test Fab".to_string(),
        gsm: 200,
        width: "60".to_string(),
        composition: "100% Cotton".to_string(),
        status,
        manufacturer_id: UserId(2),
        meta_data: Metadata::from_iter([("Shrinkage".to_string(), "5%".to_string())]),
        created_at: Utc::now(),
    }
}

/// Create a test fabric with a specific id
pub fn test_fabric_with_id(id: i32, ref_code: &str, status: FabricStatus) -> Fabric {
    Fabric {
        id: FabricId(id),
        ..test_fabric(ref_code, status)
    }
}
