use async_trait::async_trait;
use uuid::Uuid;

use crate::resource::application::domain::entities::{NewResource, Resource, ResourceCategory};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ResourceRepositoryError {
    #[error("Resource not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Ascending by display order, optionally restricted to one category.
    async fn list(
        &self,
        category: Option<ResourceCategory>,
    ) -> Result<Vec<Resource>, ResourceRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<Resource, ResourceRepositoryError>;

    async fn insert(&self, resource: NewResource) -> Result<Resource, ResourceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ResourceRepositoryError>;
}
