use std::sync::Arc;

use crate::modules::content::application::domain::entities::{
    ContentKind, Experience, Profile, Project, Skill, SocialLink,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteContentUseCase, GetContentUseCase, ListContentUseCase, SaveContentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::application::services::{
    DeleteContentService, GetContentService, ListContentService, SaveContentService,
};
use crate::shared::cache::QueryCache;

/// The four use cases of one content kind.
pub struct ContentSet<R: ContentKind> {
    pub list: Arc<dyn ListContentUseCase<R> + Send + Sync>,
    pub get: Arc<dyn GetContentUseCase<R> + Send + Sync>,
    pub save: Arc<dyn SaveContentUseCase<R> + Send + Sync>,
    pub delete: Arc<dyn DeleteContentUseCase<R> + Send + Sync>,
}

impl<R: ContentKind> Clone for ContentSet<R> {
    fn clone(&self) -> Self {
        Self {
            list: Arc::clone(&self.list),
            get: Arc::clone(&self.get),
            save: Arc::clone(&self.save),
            delete: Arc::clone(&self.delete),
        }
    }
}

impl<R: ContentKind> ContentSet<R> {
    pub fn from_repository<Repo>(repository: Arc<Repo>, cache: Arc<QueryCache>) -> Self
    where
        Repo: ContentRepository<R> + 'static,
    {
        Self {
            list: Arc::new(ListContentService::new(
                Arc::clone(&repository),
                Arc::clone(&cache),
            )),
            get: Arc::new(GetContentService::new(Arc::clone(&repository))),
            save: Arc::new(SaveContentService::new(
                Arc::clone(&repository),
                Arc::clone(&cache),
            )),
            delete: Arc::new(DeleteContentService::new(repository, cache)),
        }
    }
}

#[derive(Clone)]
pub struct ContentUseCases {
    pub profile: ContentSet<Profile>,
    pub projects: ContentSet<Project>,
    pub experiences: ContentSet<Experience>,
    pub skills: ContentSet<Skill>,
    pub social_links: ContentSet<SocialLink>,
}
