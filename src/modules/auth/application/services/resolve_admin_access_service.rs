use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::{AdminGate, AppRole};
use crate::auth::application::ports::incoming::use_cases::ResolveAdminAccessUseCase;
use crate::auth::application::ports::outgoing::RoleQuery;

#[derive(Clone)]
pub struct ResolveAdminAccessService<Q>
where
    Q: RoleQuery + Send + Sync,
{
    role_query: Arc<Q>,
}

impl<Q> ResolveAdminAccessService<Q>
where
    Q: RoleQuery + Send + Sync,
{
    pub fn new(role_query: Arc<Q>) -> Self {
        Self { role_query }
    }
}

#[async_trait]
impl<Q> ResolveAdminAccessUseCase for ResolveAdminAccessService<Q>
where
    Q: RoleQuery + Send + Sync + 'static,
{
    async fn execute(&self, user_id: Option<Uuid>) -> AdminGate {
        let Some(user_id) = user_id else {
            return AdminGate::Unauthenticated;
        };

        match self.role_query.has_role(user_id, AppRole::Admin).await {
            Ok(true) => AdminGate::Admin,
            Ok(false) => {
                warn!("User {} requested admin access without the admin role", user_id);
                AdminGate::AccessDenied
            }
            Err(e) => {
                error!("Role lookup failed for user {}: {}", user_id, e);
                AdminGate::Loading
            }
        }
    }
}
