use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::ContentKind;
use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentError, GetContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

/// Uncached single read, used to seed edit forms.
pub struct GetContentService<Repo> {
    repository: Arc<Repo>,
}

impl<Repo> GetContentService<Repo> {
    pub fn new(repository: Arc<Repo>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R, Repo> GetContentUseCase<R> for GetContentService<Repo>
where
    R: ContentKind,
    Repo: ContentRepository<R> + 'static,
{
    async fn execute(&self, id: Uuid) -> Result<R, GetContentError> {
        self.repository.get(id).await.map_err(|e| match e {
            ContentRepositoryError::NotFound => GetContentError::NotFound,
            other => GetContentError::RepositoryError(other.to_string()),
        })
    }
}
