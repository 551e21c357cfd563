use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::resource::application::domain::entities::{Resource, StoragePath, RESOURCES_KEY};
use crate::resource::application::ports::incoming::use_cases::{
    DeleteResourceError, DeleteResourceUseCase,
};
use crate::resource::application::ports::outgoing::{
    ObjectStorage, ResourceRepository, ResourceRepositoryError,
};
use crate::shared::cache::{QueryCache, QueryKey};

pub struct DeleteResourceService<Repo, Storage> {
    repository: Arc<Repo>,
    storage: Arc<Storage>,
    cache: Arc<QueryCache>,
}

impl<Repo, Storage> DeleteResourceService<Repo, Storage> {
    pub fn new(repository: Arc<Repo>, storage: Arc<Storage>, cache: Arc<QueryCache>) -> Self {
        Self {
            repository,
            storage,
            cache,
        }
    }
}

fn map_repo_err(e: ResourceRepositoryError) -> DeleteResourceError {
    match e {
        ResourceRepositoryError::NotFound => DeleteResourceError::NotFound,
        ResourceRepositoryError::DatabaseError(msg) => DeleteResourceError::RepositoryError(msg),
    }
}

#[async_trait]
impl<Repo, Storage> DeleteResourceUseCase for DeleteResourceService<Repo, Storage>
where
    Repo: ResourceRepository + 'static,
    Storage: ObjectStorage + 'static,
{
    async fn execute(&self, id: Uuid) -> Result<Resource, DeleteResourceError> {
        let resource = self.repository.get(id).await.map_err(map_repo_err)?;

        match StoragePath::from_public_url(&resource.file_url, self.storage.bucket()) {
            Some(path) => {
                if let Err(e) = self.storage.remove_object(&path).await {
                    warn!("Could not remove stored object {}: {}", path, e);
                }
            }
            None => warn!(
                "Resource {} has no storage path in {}",
                resource.id, resource.file_url
            ),
        }

        self.repository.delete(id).await.map_err(map_repo_err)?;

        self.cache.invalidate(&QueryKey::entity(RESOURCES_KEY));
        info!("Resource {} deleted", id);

        Ok(resource)
    }
}
