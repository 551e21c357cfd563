use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::content::application::domain::entities::ContentKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListContentError {
    #[error("{0}")]
    RepositoryError(String),
}

/// Cached read of every record of one kind, ascending by display order.
/// The list is shared with every other reader of the same key.
#[async_trait]
pub trait ListContentUseCase<R: ContentKind>: Send + Sync {
    async fn execute(&self) -> Result<Arc<Vec<R>>, ListContentError>;
}
