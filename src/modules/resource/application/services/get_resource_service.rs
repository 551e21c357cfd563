use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::resource::application::domain::entities::Resource;
use crate::resource::application::ports::incoming::use_cases::{
    GetResourceError, GetResourceUseCase,
};
use crate::resource::application::ports::outgoing::{ResourceRepository, ResourceRepositoryError};

pub struct GetResourceService<Repo> {
    repository: Arc<Repo>,
}

impl<Repo> GetResourceService<Repo> {
    pub fn new(repository: Arc<Repo>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<Repo> GetResourceUseCase for GetResourceService<Repo>
where
    Repo: ResourceRepository + 'static,
{
    async fn execute(&self, id: Uuid) -> Result<Resource, GetResourceError> {
        self.repository.get(id).await.map_err(|e| match e {
            ResourceRepositoryError::NotFound => GetResourceError::NotFound,
            ResourceRepositoryError::DatabaseError(msg) => GetResourceError::RepositoryError(msg),
        })
    }
}
