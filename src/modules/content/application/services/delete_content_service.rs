use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::ContentKind;
use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteContentError, DeleteContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::shared::cache::{QueryCache, QueryKey};

/// Direct delete, no confirmation step.
pub struct DeleteContentService<Repo> {
    repository: Arc<Repo>,
    cache: Arc<QueryCache>,
}

impl<Repo> DeleteContentService<Repo> {
    pub fn new(repository: Arc<Repo>, cache: Arc<QueryCache>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R, Repo> DeleteContentUseCase<R> for DeleteContentService<Repo>
where
    R: ContentKind,
    Repo: ContentRepository<R> + 'static,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContentError> {
        ContentRepository::<R>::delete(self.repository.as_ref(), id)
            .await
            .map_err(|e| match e {
                ContentRepositoryError::NotFound => DeleteContentError::NotFound,
                other => DeleteContentError::RepositoryError(other.to_string()),
            })?;

        self.cache.invalidate(&QueryKey::entity(R::KEY));
        info!(kind = R::KEY, %id, "content deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::content::application::domain::entities::Skill;
    use crate::tests::support::content_fixtures::{skill, InMemorySkillRepository};

    #[tokio::test]
    async fn removes_only_the_target_record() {
        let keep = skill("SQL", "Languages", 0);
        let gone = skill("Rust", "Languages", 1);
        let repo = Arc::new(InMemorySkillRepository::with(vec![keep.clone(), gone.clone()]));
        let service = DeleteContentService::new(Arc::clone(&repo), Arc::new(QueryCache::new()));

        DeleteContentUseCase::<Skill>::execute(&service, gone.id)
            .await
            .unwrap();

        assert_eq!(repo.snapshot(), vec![keep]);
    }

    #[tokio::test]
    async fn maps_not_found() {
        let repo = Arc::new(InMemorySkillRepository::with(vec![]));
        let service = DeleteContentService::new(repo, Arc::new(QueryCache::new()));

        let err = DeleteContentUseCase::<Skill>::execute(&service, Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err, DeleteContentError::NotFound);
    }
}
