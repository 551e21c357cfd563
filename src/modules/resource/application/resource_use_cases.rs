use std::sync::Arc;

use crate::resource::application::domain::policies::UploadPolicy;
use crate::resource::application::ports::incoming::use_cases::{
    DeleteResourceUseCase, GetResourceUseCase, ListResourcesUseCase, UploadResourceUseCase,
};
use crate::resource::application::ports::outgoing::{ObjectStorage, ResourceRepository};
use crate::resource::application::services::{
    DeleteResourceService, GetResourceService, ListResourcesService, UploadResourceService,
};
use crate::shared::cache::QueryCache;

#[derive(Clone)]
pub struct ResourceUseCases {
    pub list: Arc<dyn ListResourcesUseCase + Send + Sync>,
    pub get: Arc<dyn GetResourceUseCase + Send + Sync>,
    pub upload: Arc<dyn UploadResourceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteResourceUseCase + Send + Sync>,
    /// Upload limits, also used to size the raw body extractor.
    pub policy: UploadPolicy,
}

impl ResourceUseCases {
    pub fn new<Repo, Storage>(
        repository: Arc<Repo>,
        storage: Arc<Storage>,
        policy: UploadPolicy,
        cache: Arc<QueryCache>,
    ) -> Self
    where
        Repo: ResourceRepository + 'static,
        Storage: ObjectStorage + 'static,
    {
        Self {
            list: Arc::new(ListResourcesService::new(
                Arc::clone(&repository),
                Arc::clone(&cache),
            )),
            get: Arc::new(GetResourceService::new(Arc::clone(&repository))),
            upload: Arc::new(UploadResourceService::new(
                Arc::clone(&repository),
                Arc::clone(&storage),
                policy.clone(),
                Arc::clone(&cache),
            )),
            delete: Arc::new(DeleteResourceService::new(repository, storage, cache)),
            policy,
        }
    }
}
