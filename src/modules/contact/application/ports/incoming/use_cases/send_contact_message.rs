use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::contact::application::domain::ContactValidationError;
use crate::contact::application::ports::outgoing::ContactRelayError;

/// Raw form input. Missing fields read as empty.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactSubmission {
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "Hi! I'd like to talk about a dashboard project.")]
    pub message: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SendContactMessageError {
    #[error(transparent)]
    Invalid(#[from] ContactValidationError),
    #[error(transparent)]
    Relay(#[from] ContactRelayError),
}

#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(&self, submission: ContactSubmission) -> Result<(), SendContactMessageError>;
}
