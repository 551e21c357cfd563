use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::content::application::content_use_cases::ContentUseCases;
use crate::presentation::application::domain::icons::IconRegistry;
use crate::presentation::application::domain::landing::{
    group_skills, service_cards, showcase, social_cards, timeline, LandingPage, Section,
};
use crate::presentation::application::ports::incoming::use_cases::GetLandingPageUseCase;

pub struct LandingPageService {
    content: ContentUseCases,
    icons: Arc<IconRegistry>,
}

impl LandingPageService {
    pub fn new(content: ContentUseCases, icons: Arc<IconRegistry>) -> Self {
        Self { content, icons }
    }
}

fn section<T, U, E: std::fmt::Display>(
    name: &str,
    result: Result<T, E>,
    build: impl FnOnce(T) -> U,
) -> Section<U> {
    match result {
        Ok(records) => Section::loaded(build(records)),
        Err(e) => {
            warn!("Landing section {} failed to load: {}", name, e);
            Section::failed(e.to_string())
        }
    }
}

#[async_trait]
impl GetLandingPageUseCase for LandingPageService {
    async fn execute(&self) -> LandingPage {
        let (profile, projects, experiences, skills, social_links) = tokio::join!(
            self.content.profile.list.execute(),
            self.content.projects.list.execute(),
            self.content.experiences.list.execute(),
            self.content.skills.list.execute(),
            self.content.social_links.list.execute(),
        );

        let profile = match profile {
            Ok(rows) => match rows.first() {
                Some(p) => Section::loaded(p.clone()),
                None => Section::empty(),
            },
            Err(e) => {
                warn!("Landing section profile failed to load: {}", e);
                Section::failed(e.to_string())
            }
        };

        let icons = &self.icons;
        LandingPage {
            profile,
            projects: section("projects", projects, |p| showcase(&p)),
            experiences: section("experiences", experiences, |e| timeline(&e, icons)),
            skills: section("skills", skills, |s| group_skills(&s, icons)),
            social_links: section("social_links", social_links, |l| social_cards(&l, icons)),
            services: service_cards(icons),
        }
    }
}
