use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use super::storage_config::StorageConfig;
use crate::resource::application::domain::entities::StoragePath;
use crate::resource::application::ports::outgoing::{ObjectStorage, ObjectStorageError};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Seam over the HTTP calls so the adapter can be tested without a
/// storage server.
#[async_trait]
trait StorageClient: Send + Sync {
    async fn upload(
        &self,
        url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ObjectStorageError>;

    async fn remove(&self, url: &str, prefixes: Vec<String>) -> Result<(), ObjectStorageError>;
}

struct ReqwestStorageClient {
    client: reqwest::Client,
    service_key: String,
}

impl ReqwestStorageClient {
    async fn check(response: reqwest::Response) -> Result<(), ObjectStorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ObjectStorageError::Rejected(format!("{}: {}", status, body)))
    }
}

#[async_trait]
impl StorageClient for ReqwestStorageClient {
    async fn upload(
        &self,
        url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|e| ObjectStorageError::Unreachable(e.to_string()))?;

        Self::check(response).await
    }

    async fn remove(&self, url: &str, prefixes: Vec<String>) -> Result<(), ObjectStorageError> {
        let response = self
            .client
            .delete(url)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(&json!({ "prefixes": prefixes }))
            .send()
            .await
            .map_err(|e| ObjectStorageError::Unreachable(e.to_string()))?;

        Self::check(response).await
    }
}

/// Object storage over the hosted storage REST API.
#[derive(Clone)]
pub struct HttpObjectStorage {
    config: StorageConfig,
    client: Arc<dyn StorageClient>,
}

impl HttpObjectStorage {
    pub fn new(config: StorageConfig) -> Self {
        let client = ReqwestStorageClient {
            client: reqwest::Client::new(),
            service_key: config.service_key.clone(),
        };

        Self {
            config,
            client: Arc::new(client),
        }
    }

    #[cfg(test)]
    fn with_client(config: StorageConfig, client: Arc<dyn StorageClient>) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    fn bucket(&self) -> &str {
        &self.config.bucket
    }

    async fn put_object(
        &self,
        path: &StoragePath,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, ObjectStorageError> {
        let content_type = content_type.unwrap_or(FALLBACK_CONTENT_TYPE);

        self.client
            .upload(&self.config.object_url(path.as_str()), bytes, content_type)
            .await?;

        Ok(self.config.public_url(path.as_str()))
    }

    async fn remove_object(&self, path: &StoragePath) -> Result<(), ObjectStorageError> {
        self.client
            .remove(&self.config.bucket_url(), vec![path.as_str().to_string()])
            .await
    }
}
