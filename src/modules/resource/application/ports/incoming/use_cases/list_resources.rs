use async_trait::async_trait;
use std::sync::Arc;

use crate::resource::application::domain::entities::{Resource, ResourceCategory};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ListResourcesError {
    #[error("{0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListResourcesUseCase: Send + Sync {
    async fn execute(
        &self,
        category: Option<ResourceCategory>,
    ) -> Result<Arc<Vec<Resource>>, ListResourcesError>;
}
