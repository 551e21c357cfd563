use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminGate;
use crate::auth::application::ports::incoming::use_cases::ResolveAdminAccessUseCase;
use crate::contact::application::domain::ContactMessage;
use crate::contact::application::ports::outgoing::{ContactRelay, ContactRelayError};

/// Answers every signed-in user with a fixed gate; anonymous callers are
/// always `Unauthenticated`.
#[derive(Clone)]
pub struct StubAdminAccess {
    signed_in: AdminGate,
}

impl Default for StubAdminAccess {
    fn default() -> Self {
        Self {
            signed_in: AdminGate::Admin,
        }
    }
}

impl StubAdminAccess {
    pub fn denying() -> Self {
        Self {
            signed_in: AdminGate::AccessDenied,
        }
    }

    pub fn loading() -> Self {
        Self {
            signed_in: AdminGate::Loading,
        }
    }
}

#[async_trait]
impl ResolveAdminAccessUseCase for StubAdminAccess {
    async fn execute(&self, user_id: Option<Uuid>) -> AdminGate {
        match user_id {
            Some(_) => self.signed_in.clone(),
            None => AdminGate::Unauthenticated,
        }
    }
}

pub struct RecordingContactRelay {
    outcome: Result<(), ContactRelayError>,
    sent: Mutex<Vec<ContactMessage>>,
}

impl RecordingContactRelay {
    pub fn succeeding() -> Self {
        Self {
            outcome: Ok(()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ContactRelayError) -> Self {
        Self {
            outcome: Err(error),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRelay for RecordingContactRelay {
    async fn relay(&self, message: &ContactMessage) -> Result<(), ContactRelayError> {
        self.sent.lock().unwrap().push(message.clone());
        self.outcome.clone()
    }
}
