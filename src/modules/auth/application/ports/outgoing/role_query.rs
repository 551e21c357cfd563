use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::AppRole;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RoleQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RoleQuery: Send + Sync {
    async fn has_role(&self, user_id: Uuid, role: AppRole) -> Result<bool, RoleQueryError>;
}
