use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// ContentKind
// ──────────────────────────────────────────────────────────
// Ties a stored record to its write shape, its cache key and the
// slug used in admin routes.
//

pub trait ContentKind: Clone + Serialize + Send + Sync + 'static {
    type Draft: Clone + Send + Sync + 'static;

    /// Query cache entity name.
    const KEY: &'static str;
    /// Route segment (`/api/admin/{slug}`).
    const SLUG: &'static str;
    /// Human label used in notices ("Project created!").
    const LABEL: &'static str;
    /// Exactly one row expected.
    const SINGLETON: bool = false;

    fn id(&self) -> Uuid;

    fn display_order(&self) -> Option<i32> {
        None
    }
}

/// Ascending by display order. Ties keep store order.
pub fn sort_by_display_order<R: ContentKind>(records: &mut [R]) {
    records.sort_by_key(|r| r.display_order());
}

//
// ──────────────────────────────────────────────────────────
// Profile (singleton)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub roles: Vec<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub cv_url: Option<String>,
    pub profile_image: Option<String>,
    pub stats_projects: i32,
    pub stats_experience: String,
    pub stats_clients: i32,
    pub stats_awards: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileDraft {
    pub name: String,
    pub roles: Vec<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub cv_url: Option<String>,
    pub profile_image: Option<String>,
    pub stats_projects: i32,
    pub stats_experience: String,
    pub stats_clients: i32,
    pub stats_awards: i32,
}

impl ContentKind for Profile {
    type Draft = ProfileDraft;

    const KEY: &'static str = "personal-info";
    const SLUG: &'static str = "profile";
    const LABEL: &'static str = "Profile";
    const SINGLETON: bool = true;

    fn id(&self) -> Uuid {
        self.id
    }
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub thumbnail: Option<String>,
    pub featured: bool,
    pub coming_soon: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: Option<String>,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub thumbnail: Option<String>,
    pub featured: bool,
    pub coming_soon: bool,
    pub display_order: i32,
}

impl ContentKind for Project {
    type Draft = ProjectDraft;

    const KEY: &'static str = "projects";
    const SLUG: &'static str = "projects";
    const LABEL: &'static str = "Project";

    fn id(&self) -> Uuid {
        self.id
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

pub const EXPERIENCE_WORK: &str = "work";
pub const EXPERIENCE_EDUCATION: &str = "education";

/// `entry_type` is a free string at the storage layer; only the form
/// restricts it to work / education.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExperienceDraft {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub entry_type: String,
    pub display_order: i32,
}

impl ContentKind for Experience {
    type Draft = ExperienceDraft;

    const KEY: &'static str = "experiences";
    const SLUG: &'static str = "experiences";
    const LABEL: &'static str = "Experience";

    fn id(&self) -> Uuid {
        self.id
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }
}

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkillDraft {
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
}

impl ContentKind for Skill {
    type Draft = SkillDraft;

    const KEY: &'static str = "skills";
    const SLUG: &'static str = "skills";
    const LABEL: &'static str = "Skill";

    fn id(&self) -> Uuid {
        self.id
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }
}

//
// ──────────────────────────────────────────────────────────
// Social link
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialLink {
    pub id: Uuid,
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SocialLinkDraft {
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub display_order: i32,
}

impl ContentKind for SocialLink {
    type Draft = SocialLinkDraft;

    const KEY: &'static str = "social-links";
    const SLUG: &'static str = "social-links";
    const LABEL: &'static str = "Social link";

    fn id(&self) -> Uuid {
        self.id
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }
}
