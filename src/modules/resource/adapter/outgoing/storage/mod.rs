mod http_object_storage;
mod storage_config;

pub use http_object_storage::HttpObjectStorage;
pub use storage_config::StorageConfig;
