use crate::shared::config::{self, ConfigError};

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`.
    pub base_url: String,
    pub service_key: String,
    pub bucket: String,
}

impl StorageConfig {
    pub const DEFAULT_BUCKET: &'static str = "resources";

    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = config::required("STORAGE_URL")?
            .trim_end_matches('/')
            .to_string();
        let service_key = config::required("STORAGE_SERVICE_KEY")?;
        let bucket =
            config::optional("STORAGE_BUCKET").unwrap_or_else(|| Self::DEFAULT_BUCKET.to_string());

        Ok(Self {
            base_url,
            service_key,
            bucket,
        })
    }

    pub fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path)
    }

    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    pub fn bucket_url(&self) -> String {
        format!("{}/storage/v1/object/{}", self.base_url, self.bucket)
    }
}
