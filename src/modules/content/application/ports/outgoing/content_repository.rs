// src/modules/content/application/ports/outgoing/content_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::ContentKind;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Record already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
// One implementation per table. `list` returns rows ascending by
// display order where the table has one; for the singleton profile
// it returns the first row or nothing.
//

#[async_trait]
pub trait ContentRepository<R: ContentKind>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, ContentRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<R, ContentRepositoryError>;

    async fn create(&self, draft: R::Draft) -> Result<R, ContentRepositoryError>;

    /// Full replace of every writable column. Last write wins.
    async fn update(&self, id: Uuid, draft: R::Draft) -> Result<R, ContentRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError>;
}
