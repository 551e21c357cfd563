use async_trait::async_trait;
use uuid::Uuid;

use crate::resource::application::domain::entities::Resource;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GetResourceError {
    #[error("Resource not found")]
    NotFound,
    #[error("{0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetResourceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Resource, GetResourceError>;
}
