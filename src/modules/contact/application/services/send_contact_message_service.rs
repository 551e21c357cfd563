use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::contact::application::domain::ContactMessage;
use crate::contact::application::ports::incoming::use_cases::{
    ContactSubmission, SendContactMessageError, SendContactMessageUseCase,
};
use crate::contact::application::ports::outgoing::{ContactRelay, ContactRelayError};

pub struct SendContactMessageService {
    relay: Arc<dyn ContactRelay + Send + Sync>,
}

impl SendContactMessageService {
    pub fn new(relay: Arc<dyn ContactRelay + Send + Sync>) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl SendContactMessageUseCase for SendContactMessageService {
    async fn execute(&self, submission: ContactSubmission) -> Result<(), SendContactMessageError> {
        let message =
            ContactMessage::parse(&submission.name, &submission.email, &submission.message)?;

        match self.relay.relay(&message).await {
            Ok(()) => {
                info!("Contact message relayed for {}", message.email());
                Ok(())
            }
            Err(e) => {
                match &e {
                    ContactRelayError::Transport(detail) => {
                        warn!("Contact relay unreachable: {}", detail)
                    }
                    other => warn!("Contact relay refused message: {}", other),
                }
                Err(e.into())
            }
        }
    }
}
