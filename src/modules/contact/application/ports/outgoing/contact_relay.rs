use async_trait::async_trait;

use crate::contact::application::domain::ContactMessage;

/// Display strings are the visitor-facing notices.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ContactRelayError {
    /// The relay could not be reached; the detail is for logs only.
    #[error("Failed to send message. Please try again or email me directly.")]
    Transport(String),
    /// The relay answered `{ "error": "..." }`.
    #[error("{0}")]
    Rejected(String),
    #[error("Unexpected response from server")]
    UnexpectedResponse,
}

#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn relay(&self, message: &ContactMessage) -> Result<(), ContactRelayError>;
}
