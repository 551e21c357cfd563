use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::user_roles::{Column, Entity};
use crate::auth::application::domain::entities::AppRole;
use crate::auth::application::ports::outgoing::{RoleQuery, RoleQueryError};

#[derive(Clone, Debug)]
pub struct RoleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RoleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleQuery for RoleQueryPostgres {
    async fn has_role(&self, user_id: Uuid, role: AppRole) -> Result<bool, RoleQueryError> {
        let row = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Role.eq(role.as_str()))
            .one(&*self.db)
            .await
            .map_err(|e| RoleQueryError::DatabaseError(e.to_string()))?;

        Ok(row.is_some())
    }
}
