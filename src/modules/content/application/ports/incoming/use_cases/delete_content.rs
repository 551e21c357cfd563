use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::ContentKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteContentError {
    #[error("record not found")]
    NotFound,

    #[error("{0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteContentUseCase<R: ContentKind>: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContentError>;
}
