use async_trait::async_trait;
use uuid::Uuid;

use crate::resource::application::domain::entities::Resource;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DeleteResourceError {
    #[error("Resource not found")]
    NotFound,
    #[error("{0}")]
    RepositoryError(String),
}

/// Removes the stored file (best effort) and then the metadata row.
/// Returns the deleted record.
#[async_trait]
pub trait DeleteResourceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Resource, DeleteResourceError>;
}
