use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::ContentKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveContentError {
    #[error("record not found")]
    NotFound,

    /// Second insert of a singleton record.
    #[error("a record already exists; edit it instead")]
    SingletonExists,

    #[error("{0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedContent<R> {
    pub record: R,
    pub created: bool,
}

/// Insert when `id` is `None`, update by id otherwise.
/// The cache is only invalidated after a successful write.
#[async_trait]
pub trait SaveContentUseCase<R: ContentKind>: Send + Sync {
    async fn execute(
        &self,
        id: Option<Uuid>,
        draft: R::Draft,
    ) -> Result<SavedContent<R>, SaveContentError>;
}
