use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{
    sort_by_display_order, ContentKind,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    ListContentError, ListContentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::shared::cache::{QueryCache, QueryKey};

pub struct ListContentService<Repo> {
    repository: Arc<Repo>,
    cache: Arc<QueryCache>,
}

impl<Repo> ListContentService<Repo> {
    pub fn new(repository: Arc<Repo>, cache: Arc<QueryCache>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R, Repo> ListContentUseCase<R> for ListContentService<Repo>
where
    R: ContentKind,
    Repo: ContentRepository<R> + 'static,
{
    async fn execute(&self) -> Result<Arc<Vec<R>>, ListContentError> {
        let repository = Arc::clone(&self.repository);

        self.cache
            .fetch(QueryKey::entity(R::KEY), move || async move {
                let mut records = repository.list().await.map_err(|e| e.to_string())?;
                sort_by_display_order(&mut records);
                Ok(records)
            })
            .await
            .map_err(|e| ListContentError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use crate::modules::content::application::domain::entities::Skill;
    use crate::tests::support::content_fixtures::{skill, InMemorySkillRepository};

    #[tokio::test]
    async fn returns_records_sorted_by_display_order() {
        let repo = Arc::new(InMemorySkillRepository::with(vec![
            skill("SQL", "Languages", 2),
            skill("Rust", "Languages", 0),
            skill("Docker", "Tools", 1),
        ]));
        let service = ListContentService::new(repo, Arc::new(QueryCache::new()));

        let skills: Arc<Vec<Skill>> = service.execute().await.unwrap();

        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Docker", "SQL"]);
    }

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let repo = Arc::new(InMemorySkillRepository::with(vec![skill("Rust", "Languages", 0)]));
        let service = ListContentService::new(Arc::clone(&repo), Arc::new(QueryCache::new()));

        let _: Arc<Vec<Skill>> = service.execute().await.unwrap();
        let _: Arc<Vec<Skill>> = service.execute().await.unwrap();

        assert_eq!(repo.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn surfaces_repository_failure() {
        let repo = Arc::new(InMemorySkillRepository::failing("connection reset"));
        let service = ListContentService::new(repo, Arc::new(QueryCache::new()));

        let res: Result<Arc<Vec<Skill>>, _> = service.execute().await;

        assert!(matches!(
            res,
            Err(ListContentError::RepositoryError(msg)) if msg.contains("connection reset")
        ));
    }
}
