use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminGate;

/// Resolves the admin gate for an optional signed-in user. Never fails:
/// an unanswered role lookup resolves to [`AdminGate::Loading`].
#[async_trait]
pub trait ResolveAdminAccessUseCase: Send + Sync {
    async fn execute(&self, user_id: Option<Uuid>) -> AdminGate;
}
