//! User domain entity
//!
//! Represents an account on the platform: either an administrator or a
//! manufacturer ("mill") that owns fabric listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i32);

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manufacturer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manufacturer => write!(f, "manufacturer"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manufacturer" => Ok(Role::Manufacturer),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// A platform account
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Argon2 PHC string; never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this account may call the admin endpoints
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Manufacturer.to_string(), "manufacturer");
    }

    #[test]
    fn role_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("MANUFACTURER".parse::<Role>().unwrap(), Role::Manufacturer);
        assert!("buyer".parse::<Role>().is_err());
    }

    #[test]
    fn user_is_admin() {
        let mut user = User {
            id: UserId(1),
            email: "admin@test.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Admin,
            company_name: "Admin Corp".to_string(),
            created_at: Utc::now(),
        };
        assert!(user.is_admin());

        user.role = Role::Manufacturer;
        assert!(!user.is_admin());
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let user = User {
            id: UserId(1),
            email: "mill@test.com".to_string(),
            password_hash: "super-secret-hash".to_string(),
            role: Role::Manufacturer,
            company_name: "Test Mill".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("super-secret-hash"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn user_id_display() {
        assert_eq!(UserId(42).to_string(), "42");
    }
}
