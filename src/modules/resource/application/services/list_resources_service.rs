use async_trait::async_trait;
use std::sync::Arc;

use crate::resource::application::domain::entities::{
    Resource, ResourceCategory, RESOURCES_KEY,
};
use crate::resource::application::ports::incoming::use_cases::{
    ListResourcesError, ListResourcesUseCase,
};
use crate::resource::application::ports::outgoing::ResourceRepository;
use crate::shared::cache::{QueryCache, QueryKey};

pub struct ListResourcesService<Repo> {
    repository: Arc<Repo>,
    cache: Arc<QueryCache>,
}

impl<Repo> ListResourcesService<Repo> {
    pub fn new(repository: Arc<Repo>, cache: Arc<QueryCache>) -> Self {
        Self { repository, cache }
    }
}

fn cache_key(category: Option<ResourceCategory>) -> QueryKey {
    match category {
        Some(c) => QueryKey::filtered(RESOURCES_KEY, c.as_str()),
        None => QueryKey::entity(RESOURCES_KEY),
    }
}

#[async_trait]
impl<Repo> ListResourcesUseCase for ListResourcesService<Repo>
where
    Repo: ResourceRepository + 'static,
{
    async fn execute(
        &self,
        category: Option<ResourceCategory>,
    ) -> Result<Arc<Vec<Resource>>, ListResourcesError> {
        let repository = Arc::clone(&self.repository);

        self.cache
            .fetch(cache_key(category), move || async move {
                let mut resources = repository.list(category).await.map_err(|e| e.to_string())?;
                resources.sort_by_key(|r| r.display_order);
                Ok(resources)
            })
            .await
            .map_err(|e| ListResourcesError::RepositoryError(e.to_string()))
    }
}
