use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::ContentKind;
use crate::modules::content::application::ports::incoming::use_cases::{
    SaveContentError, SaveContentUseCase, SavedContent,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::shared::cache::{QueryCache, QueryKey};

pub struct SaveContentService<Repo> {
    repository: Arc<Repo>,
    cache: Arc<QueryCache>,
}

impl<Repo> SaveContentService<Repo> {
    pub fn new(repository: Arc<Repo>, cache: Arc<QueryCache>) -> Self {
        Self { repository, cache }
    }
}

fn map_repo_err(e: ContentRepositoryError) -> SaveContentError {
    match e {
        ContentRepositoryError::NotFound => SaveContentError::NotFound,
        ContentRepositoryError::AlreadyExists => SaveContentError::SingletonExists,
        other => SaveContentError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R, Repo> SaveContentUseCase<R> for SaveContentService<Repo>
where
    R: ContentKind,
    Repo: ContentRepository<R> + 'static,
{
    async fn execute(
        &self,
        id: Option<Uuid>,
        draft: R::Draft,
    ) -> Result<SavedContent<R>, SaveContentError> {
        let saved = match id {
            Some(id) => SavedContent {
                record: self.repository.update(id, draft).await.map_err(map_repo_err)?,
                created: false,
            },
            None => {
                if R::SINGLETON {
                    let existing = self.repository.list().await.map_err(map_repo_err)?;
                    if !existing.is_empty() {
                        return Err(SaveContentError::SingletonExists);
                    }
                }

                SavedContent {
                    record: self.repository.create(draft).await.map_err(map_repo_err)?,
                    created: true,
                }
            }
        };

        self.cache.invalidate(&QueryKey::entity(R::KEY));

        info!(
            kind = R::KEY,
            id = %saved.record.id(),
            created = saved.created,
            "content saved"
        );

        Ok(saved)
    }
}
