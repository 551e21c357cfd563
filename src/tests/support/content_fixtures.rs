use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::content::application::content_use_cases::{ContentSet, ContentUseCases};
use crate::content::application::domain::entities::{
    ContentKind, Experience, ExperienceDraft, Profile, ProfileDraft, Project, ProjectDraft, Skill,
    SkillDraft, SocialLink, SocialLinkDraft,
};
use crate::content::application::ports::outgoing::{ContentRepository, ContentRepositoryError};
use crate::shared::cache::QueryCache;

/// Builds a stored record from its write shape.
pub trait FromDraft: ContentKind {
    fn from_draft(id: Uuid, draft: Self::Draft) -> Self;
}

impl FromDraft for Profile {
    fn from_draft(id: Uuid, d: ProfileDraft) -> Self {
        Profile {
            id,
            name: d.name,
            roles: d.roles,
            location: d.location,
            bio: d.bio,
            email: d.email,
            phone: d.phone,
            address: d.address,
            cv_url: d.cv_url,
            profile_image: d.profile_image,
            stats_projects: d.stats_projects,
            stats_experience: d.stats_experience,
            stats_clients: d.stats_clients,
            stats_awards: d.stats_awards,
        }
    }
}

impl FromDraft for Project {
    fn from_draft(id: Uuid, d: ProjectDraft) -> Self {
        Project {
            id,
            title: d.title,
            description: d.description,
            tech_stack: d.tech_stack,
            github_url: d.github_url,
            live_url: d.live_url,
            thumbnail: d.thumbnail,
            featured: d.featured,
            coming_soon: d.coming_soon,
            display_order: d.display_order,
        }
    }
}

impl FromDraft for Experience {
    fn from_draft(id: Uuid, d: ExperienceDraft) -> Self {
        Experience {
            id,
            role: d.role,
            company: d.company,
            period: d.period,
            description: d.description,
            icon: d.icon,
            entry_type: d.entry_type,
            display_order: d.display_order,
        }
    }
}

impl FromDraft for Skill {
    fn from_draft(id: Uuid, d: SkillDraft) -> Self {
        Skill {
            id,
            name: d.name,
            category: d.category,
            icon: d.icon,
            description: d.description,
            display_order: d.display_order,
        }
    }
}

impl FromDraft for SocialLink {
    fn from_draft(id: Uuid, d: SocialLinkDraft) -> Self {
        SocialLink {
            id,
            platform: d.platform,
            url: d.url,
            icon: d.icon,
            display_order: d.display_order,
        }
    }
}

/// Vec-backed table. `failing` breaks every call, `fail_writes` only the
/// mutating ones.
pub struct InMemoryContentRepository<R: ContentKind> {
    records: Mutex<Vec<R>>,
    read_error: Option<String>,
    write_error: Mutex<Option<String>>,
    writes: AtomicUsize,
    pub list_calls: AtomicUsize,
}

pub type InMemoryProfileRepository = InMemoryContentRepository<Profile>;
pub type InMemoryProjectRepository = InMemoryContentRepository<Project>;
pub type InMemoryExperienceRepository = InMemoryContentRepository<Experience>;
pub type InMemorySkillRepository = InMemoryContentRepository<Skill>;
pub type InMemorySocialLinkRepository = InMemoryContentRepository<SocialLink>;

impl<R: ContentKind + FromDraft> InMemoryContentRepository<R> {
    pub fn with(records: Vec<R>) -> Self {
        Self {
            records: Mutex::new(records),
            read_error: None,
            write_error: Mutex::new(None),
            writes: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        let repo = Self::with(Vec::new());
        repo.fail_writes(message);
        Self {
            read_error: Some(message.to_string()),
            ..repo
        }
    }

    pub fn fail_writes(&self, message: &str) {
        *self.write_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn snapshot(&self) -> Vec<R> {
        self.records.lock().unwrap().clone()
    }

    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_read(&self) -> Result<(), ContentRepositoryError> {
        match &self.read_error {
            Some(msg) => Err(ContentRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }

    fn check_write(&self) -> Result<(), ContentRepositoryError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        match self.write_error.lock().unwrap().as_ref() {
            Some(msg) => Err(ContentRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<R: ContentKind + FromDraft> ContentRepository<R> for InMemoryContentRepository<R> {
    async fn list(&self) -> Result<Vec<R>, ContentRepositoryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_read()?;
        Ok(self.snapshot())
    }

    async fn get(&self, id: Uuid) -> Result<R, ContentRepositoryError> {
        self.check_read()?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn create(&self, draft: R::Draft) -> Result<R, ContentRepositoryError> {
        self.check_write()?;
        let record = R::from_draft(Uuid::new_v4(), draft);
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, draft: R::Draft) -> Result<R, ContentRepositoryError> {
        self.check_write()?;
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(ContentRepositoryError::NotFound)?;
        *slot = R::from_draft(id, draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        self.check_write()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(ContentRepositoryError::NotFound);
        }
        Ok(())
    }
}

impl InMemoryProfileRepository {
    pub fn with_profile() -> Self {
        Self::with(vec![profile()])
    }

    /// Write shape of the stored profile.
    pub fn draft(&self) -> ProfileDraft {
        let p = self.snapshot().into_iter().next().unwrap_or_else(profile);
        ProfileDraft {
            name: p.name,
            roles: p.roles,
            location: p.location,
            bio: p.bio,
            email: p.email,
            phone: p.phone,
            address: p.address,
            cv_url: p.cv_url,
            profile_image: p.profile_image,
            stats_projects: p.stats_projects,
            stats_experience: p.stats_experience,
            stats_clients: p.stats_clients,
            stats_awards: p.stats_awards,
        }
    }

    pub fn set_roles(&mut self, roles: Vec<String>) {
        for p in self.records.get_mut().unwrap().iter_mut() {
            p.roles = roles.clone();
        }
    }
}

pub fn profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: "Jordan Reyes".to_string(),
        roles: vec!["Data Scientist".to_string(), "Data Analyst".to_string()],
        location: Some("Lisbon".to_string()),
        bio: Some("I turn messy data into decisions.".to_string()),
        email: Some("jordan@example.com".to_string()),
        phone: None,
        address: None,
        cv_url: None,
        profile_image: None,
        stats_projects: 20,
        stats_experience: "1+".to_string(),
        stats_clients: 12,
        stats_awards: 3,
    }
}

pub fn project(title: &str, order: i32) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: Some(format!("{} description", title)),
        tech_stack: vec!["Python".to_string(), "SQL".to_string()],
        github_url: Some("https://github.com/example/repo".to_string()),
        live_url: None,
        thumbnail: None,
        featured: false,
        coming_soon: false,
        display_order: order,
    }
}

pub fn experience(role: &str, entry_type: &str, order: i32) -> Experience {
    Experience {
        id: Uuid::new_v4(),
        role: role.to_string(),
        company: "Acme Analytics".to_string(),
        period: "2021 - 2023".to_string(),
        description: None,
        icon: Some("Briefcase".to_string()),
        entry_type: entry_type.to_string(),
        display_order: order,
    }
}

pub fn skill(name: &str, category: &str, order: i32) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        icon: Some("Code".to_string()),
        description: None,
        display_order: order,
    }
}

pub fn social_link(platform: &str, icon: &str, order: i32) -> SocialLink {
    SocialLink {
        id: Uuid::new_v4(),
        platform: platform.to_string(),
        url: format!("https://{}.example.com/me", platform.to_lowercase()),
        icon: icon.to_string(),
        display_order: order,
    }
}

/// Use cases over `repository` with a private cache.
pub fn content_set<R, Repo>(repository: Arc<Repo>) -> ContentSet<R>
where
    R: ContentKind,
    Repo: ContentRepository<R> + 'static,
{
    ContentSet::from_repository(repository, Arc::new(QueryCache::new()))
}

/// Every kind backed by an empty table.
pub fn content_use_cases(cache: Arc<QueryCache>) -> ContentUseCases {
    ContentUseCases {
        profile: ContentSet::from_repository(
            Arc::new(InMemoryProfileRepository::with(vec![])),
            Arc::clone(&cache),
        ),
        projects: ContentSet::from_repository(
            Arc::new(InMemoryProjectRepository::with(vec![])),
            Arc::clone(&cache),
        ),
        experiences: ContentSet::from_repository(
            Arc::new(InMemoryExperienceRepository::with(vec![])),
            Arc::clone(&cache),
        ),
        skills: ContentSet::from_repository(
            Arc::new(InMemorySkillRepository::with(vec![])),
            Arc::clone(&cache),
        ),
        social_links: ContentSet::from_repository(
            Arc::new(InMemorySocialLinkRepository::with(vec![])),
            cache,
        ),
    }
}
