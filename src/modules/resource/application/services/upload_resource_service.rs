use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::resource::application::domain::entities::{
    NewResource, Resource, StoragePath, RESOURCES_KEY,
};
use crate::resource::application::domain::policies::UploadPolicy;
use crate::resource::application::ports::incoming::use_cases::{
    UploadResourceCommand, UploadResourceError, UploadResourceUseCase,
};
use crate::resource::application::ports::outgoing::{ObjectStorage, ResourceRepository};
use crate::shared::cache::{QueryCache, QueryKey};

pub struct UploadResourceService<Repo, Storage> {
    repository: Arc<Repo>,
    storage: Arc<Storage>,
    policy: UploadPolicy,
    cache: Arc<QueryCache>,
}

impl<Repo, Storage> UploadResourceService<Repo, Storage> {
    pub fn new(
        repository: Arc<Repo>,
        storage: Arc<Storage>,
        policy: UploadPolicy,
        cache: Arc<QueryCache>,
    ) -> Self {
        Self {
            repository,
            storage,
            policy,
            cache,
        }
    }
}

#[async_trait]
impl<Repo, Storage> UploadResourceUseCase for UploadResourceService<Repo, Storage>
where
    Repo: ResourceRepository + 'static,
    Storage: ObjectStorage + 'static,
{
    async fn execute(
        &self,
        command: UploadResourceCommand,
    ) -> Result<Resource, UploadResourceError> {
        let size = command.bytes.len() as u64;
        self.policy
            .check(&command.title, &command.file_name, size)?;

        let path = StoragePath::for_upload(
            command.category,
            &command.file_name,
            Utc::now().timestamp_millis(),
        );

        let file_url = self
            .storage
            .put_object(&path, command.bytes, command.content_type.as_deref())
            .await
            .map_err(|e| UploadResourceError::StorageError(e.to_string()))?;

        let description = command
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let new_resource = NewResource {
            title: command.title.trim().to_string(),
            description,
            file_url,
            file_name: command.file_name,
            file_size: i64::try_from(size).ok(),
            file_type: command.content_type,
            category: command.category,
        };

        let resource = self.repository.insert(new_resource).await.map_err(|e| {
            // No compensating delete; the blob stays behind.
            warn!("Resource metadata insert failed, orphaned object {}: {}", path, e);
            UploadResourceError::RepositoryError(e.to_string())
        })?;

        self.cache.invalidate(&QueryKey::entity(RESOURCES_KEY));
        info!("Resource {} uploaded to {}", resource.id, path);

        Ok(resource)
    }
}
