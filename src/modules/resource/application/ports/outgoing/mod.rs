mod object_storage;
mod resource_repository;

pub use object_storage::{ObjectStorage, ObjectStorageError};
pub use resource_repository::{ResourceRepository, ResourceRepositoryError};
