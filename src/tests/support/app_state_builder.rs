use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::ResolveAdminAccessUseCase;
use crate::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;
use crate::contact::application::services::SendContactMessageService;
use crate::content::application::content_use_cases::{ContentSet, ContentUseCases};
use crate::content::application::domain::entities::{
    Experience, Profile, Project, Skill, SocialLink,
};
use crate::presentation::application::domain::icons::IconRegistry;
use crate::presentation::application::services::LandingPageService;
use crate::resource::application::resource_use_cases::ResourceUseCases;
use crate::shared::cache::QueryCache;
use crate::tests::support::content_fixtures::content_use_cases;
use crate::tests::support::resource_fixtures::{
    resource_use_cases, FakeObjectStorage, InMemoryResourceRepository,
};
use crate::tests::support::stubs::{RecordingContactRelay, StubAdminAccess};
use crate::AppState;

/// Empty tables, an admin gate that lets any token through and a relay
/// that accepts every message, unless overridden.
pub struct TestAppStateBuilder {
    content: ContentUseCases,
    resources: Option<ResourceUseCases>,
    admin_access: Arc<dyn ResolveAdminAccessUseCase + Send + Sync>,
    contact: Option<Arc<dyn SendContactMessageUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: content_use_cases(Arc::new(QueryCache::new())),
            resources: None,
            admin_access: Arc::new(StubAdminAccess::default()),
            contact: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_profile(mut self, set: ContentSet<Profile>) -> Self {
        self.content.profile = set;
        self
    }

    pub fn with_projects(mut self, set: ContentSet<Project>) -> Self {
        self.content.projects = set;
        self
    }

    pub fn with_experiences(mut self, set: ContentSet<Experience>) -> Self {
        self.content.experiences = set;
        self
    }

    pub fn with_skills(mut self, set: ContentSet<Skill>) -> Self {
        self.content.skills = set;
        self
    }

    pub fn with_social_links(mut self, set: ContentSet<SocialLink>) -> Self {
        self.content.social_links = set;
        self
    }

    pub fn with_resources(mut self, resources: ResourceUseCases) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_admin_access(
        mut self,
        access: impl ResolveAdminAccessUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin_access = Arc::new(access);
        self
    }

    pub fn with_contact_relay(mut self, relay: Arc<RecordingContactRelay>) -> Self {
        self.contact = Some(Arc::new(SendContactMessageService::new(relay)));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let resources = self.resources.unwrap_or_else(|| {
            resource_use_cases(
                Arc::new(InMemoryResourceRepository::with(vec![])),
                Arc::new(FakeObjectStorage::new("resources")),
            )
        });
        let contact = self.contact.unwrap_or_else(|| {
            Arc::new(SendContactMessageService::new(Arc::new(
                RecordingContactRelay::succeeding(),
            )))
        });
        let landing = Arc::new(LandingPageService::new(
            self.content.clone(),
            Arc::new(IconRegistry::default()),
        ));

        web::Data::new(AppState {
            content: self.content,
            resources,
            admin_access: self.admin_access,
            contact,
            landing,
        })
    }
}
