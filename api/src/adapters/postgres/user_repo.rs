//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{Role, User, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(User::try_from).transpose()
    }

    async fn find_by_role(&self, role: Role) -> Result<Vec<User>, DomainError> {
        let results = users::Entity::find()
            .filter(users::Column::Role.eq(role.to_string()))
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(User::try_from).collect()
    }
}

/// Convert SeaORM model to domain entity.
///
/// A role string the enum does not recognize means the row was written
/// outside the application; surface that instead of defaulting.
impl TryFrom<users::Model> for User {
    type Error = DomainError;

    fn try_from(model: users::Model) -> Result<Self, Self::Error> {
        let role: Role = model
            .role
            .parse()
            .map_err(|e: String| DomainError::Internal(e))?;

        Ok(User {
            id: UserId(model.id),
            email: model.email,
            password_hash: model.password_hash,
            role,
            company_name: model.company_name,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        })
    }
}
