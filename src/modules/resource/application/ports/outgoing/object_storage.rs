use async_trait::async_trait;

use crate::resource::application::domain::entities::StoragePath;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ObjectStorageError {
    #[error("Storage rejected the request: {0}")]
    Rejected(String),
    #[error("Storage unreachable: {0}")]
    Unreachable(String),
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    fn bucket(&self) -> &str;

    /// Stores the payload and returns its public URL.
    async fn put_object(
        &self,
        path: &StoragePath,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, ObjectStorageError>;

    async fn remove_object(&self, path: &StoragePath) -> Result<(), ObjectStorageError>;
}
