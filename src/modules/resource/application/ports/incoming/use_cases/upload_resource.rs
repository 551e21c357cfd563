use async_trait::async_trait;

use crate::resource::application::domain::entities::{Resource, ResourceCategory};
use crate::resource::application::domain::policies::UploadPolicyError;

#[derive(Debug, Clone)]
pub struct UploadResourceCommand {
    pub title: String,
    pub description: Option<String>,
    pub category: ResourceCategory,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum UploadResourceError {
    #[error(transparent)]
    Policy(#[from] UploadPolicyError),
    #[error("{0}")]
    StorageError(String),
    #[error("{0}")]
    RepositoryError(String),
}

/// Stores the file, then records its metadata.
#[async_trait]
pub trait UploadResourceUseCase: Send + Sync {
    async fn execute(&self, command: UploadResourceCommand)
        -> Result<Resource, UploadResourceError>;
}
