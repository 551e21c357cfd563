use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::{
    ContentKind, Experience, ExperienceDraft, Profile, ProfileDraft, Project, ProjectDraft, Skill,
    SkillDraft, SocialLink, SocialLinkDraft, EXPERIENCE_EDUCATION, EXPERIENCE_WORK,
};

pub const EXPERIENCE_ICON_OPTIONS: &[&str] = &[
    "Briefcase",
    "GraduationCap",
    "Building",
    "Code",
    "Database",
    "Server",
    "LineChart",
    "Brain",
    "Laptop",
    "BookOpen",
];

pub const SKILL_ICON_OPTIONS: &[&str] = &[
    "Code",
    "Database",
    "BarChart",
    "Brain",
    "Server",
    "Cloud",
    "Cpu",
    "Terminal",
    "FileCode",
    "LineChart",
    "PieChart",
    "Layers",
];

pub const SKILL_CATEGORY_OPTIONS: &[&str] = &[
    "Languages",
    "Frameworks",
    "Tools",
    "Databases",
    "Cloud",
    "AI/ML",
    "Other",
];

pub const EXPERIENCE_TYPE_OPTIONS: &[&str] = &[EXPERIENCE_WORK, EXPERIENCE_EDUCATION];

//
// ──────────────────────────────────────────────────────────
// Errors & options
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be one of: {allowed}")]
    InvalidChoice {
        field: &'static str,
        allowed: String,
    },
}

fn is_empty(list: &&'static [&'static str]) -> bool {
    list.is_empty()
}

/// Suggestion lists shown next to a form. Storage never enforces them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormOptions {
    #[serde(skip_serializing_if = "is_empty")]
    pub icons: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub categories: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub types: &'static [&'static str],
}

//
// ──────────────────────────────────────────────────────────
// ContentForm
// ──────────────────────────────────────────────────────────
// `Default` is the blank (create) state. Nullable columns are
// `Option` fields so a seeded form hands back exactly what it was
// given; values are stored as entered.
//

pub trait ContentForm: Serialize + DeserializeOwned + Default + Send + 'static {
    type Record: ContentKind;

    fn seeded(record: &Self::Record) -> Self;

    fn validate(&self) -> Result<(), FormError>;

    fn into_draft(self) -> <Self::Record as ContentKind>::Draft;

    fn options() -> FormOptions {
        FormOptions::default()
    }
}

/// Splits a comma-separated field, trimming entries and dropping empties.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    /// Comma-separated.
    pub roles: String,
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

impl ContentForm for ProfileForm {
    type Record = Profile;

    fn seeded(p: &Profile) -> Self {
        Self {
            name: p.name.clone(),
            roles: join_list(&p.roles),
            location: p.location.clone(),
            bio: p.bio.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            address: p.address.clone(),
            cv_url: p.cv_url.clone(),
            profile_image: p.profile_image.clone(),
            stats_projects: p.stats_projects,
            stats_experience: p.stats_experience.clone(),
            stats_clients: p.stats_clients,
            stats_awards: p.stats_awards,
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        required("name", &self.name)
    }

    fn into_draft(self) -> ProfileDraft {
        ProfileDraft {
            name: self.name,
            roles: split_list(&self.roles),
            location: self.location,
            bio: self.bio,
            email: self.email,
            phone: self.phone,
            address: self.address,
            cv_url: self.cv_url,
            profile_image: self.profile_image,
            stats_projects: self.stats_projects,
            stats_experience: self.stats_experience,
            stats_clients: self.stats_clients,
            stats_awards: self.stats_awards,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectForm {
    pub title: String,
    pub description: Option<String>,
    /// Comma-separated.
    pub tech_stack: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub thumbnail: Option<String>,
    pub featured: bool,
    pub coming_soon: bool,
    pub display_order: i32,
}

impl ContentForm for ProjectForm {
    type Record = Project;

    fn seeded(p: &Project) -> Self {
        Self {
            title: p.title.clone(),
            description: p.description.clone(),
            tech_stack: join_list(&p.tech_stack),
            github_url: p.github_url.clone(),
            live_url: p.live_url.clone(),
            thumbnail: p.thumbnail.clone(),
            featured: p.featured,
            coming_soon: p.coming_soon,
            display_order: p.display_order,
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        required("title", &self.title)
    }

    fn into_draft(self) -> ProjectDraft {
        ProjectDraft {
            title: self.title,
            description: self.description,
            tech_stack: split_list(&self.tech_stack),
            github_url: self.github_url,
            live_url: self.live_url,
            thumbnail: self.thumbnail,
            featured: self.featured,
            coming_soon: self.coming_soon,
            display_order: self.display_order,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ExperienceForm {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub display_order: i32,
}

impl Default for ExperienceForm {
    fn default() -> Self {
        Self {
            role: String::new(),
            company: String::new(),
            period: String::new(),
            description: None,
            icon: Some("Briefcase".to_string()),
            entry_type: EXPERIENCE_WORK.to_string(),
            display_order: 0,
        }
    }
}

impl ContentForm for ExperienceForm {
    type Record = Experience;

    fn seeded(e: &Experience) -> Self {
        Self {
            role: e.role.clone(),
            company: e.company.clone(),
            period: e.period.clone(),
            description: e.description.clone(),
            icon: e.icon.clone(),
            entry_type: e.entry_type.clone(),
            display_order: e.display_order,
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        required("role", &self.role)?;
        required("company", &self.company)?;
        required("period", &self.period)?;

        if !EXPERIENCE_TYPE_OPTIONS.contains(&self.entry_type.as_str()) {
            return Err(FormError::InvalidChoice {
                field: "type",
                allowed: EXPERIENCE_TYPE_OPTIONS.join(", "),
            });
        }

        Ok(())
    }

    fn into_draft(self) -> ExperienceDraft {
        ExperienceDraft {
            role: self.role,
            company: self.company,
            period: self.period,
            description: self.description,
            icon: self.icon,
            entry_type: self.entry_type,
            display_order: self.display_order,
        }
    }

    fn options() -> FormOptions {
        FormOptions {
            icons: EXPERIENCE_ICON_OPTIONS,
            types: EXPERIENCE_TYPE_OPTIONS,
            ..FormOptions::default()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SkillForm {
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
}

impl Default for SkillForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: "Languages".to_string(),
            icon: Some("Code".to_string()),
            description: None,
            display_order: 0,
        }
    }
}

impl ContentForm for SkillForm {
    type Record = Skill;

    fn seeded(s: &Skill) -> Self {
        Self {
            name: s.name.clone(),
            category: s.category.clone(),
            icon: s.icon.clone(),
            description: s.description.clone(),
            display_order: s.display_order,
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        required("name", &self.name)?;
        required("category", &self.category)
    }

    fn into_draft(self) -> SkillDraft {
        SkillDraft {
            name: self.name,
            category: self.category,
            icon: self.icon,
            description: self.description,
            display_order: self.display_order,
        }
    }

    fn options() -> FormOptions {
        FormOptions {
            icons: SKILL_ICON_OPTIONS,
            categories: SKILL_CATEGORY_OPTIONS,
            ..FormOptions::default()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Social link
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SocialLinkForm {
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub display_order: i32,
}

impl Default for SocialLinkForm {
    fn default() -> Self {
        Self {
            platform: String::new(),
            url: String::new(),
            icon: "Link".to_string(),
            display_order: 0,
        }
    }
}

impl ContentForm for SocialLinkForm {
    type Record = SocialLink;

    fn seeded(s: &SocialLink) -> Self {
        Self {
            platform: s.platform.clone(),
            url: s.url.clone(),
            icon: s.icon.clone(),
            display_order: s.display_order,
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        required("platform", &self.platform)?;
        required("url", &self.url)
    }

    fn into_draft(self) -> SocialLinkDraft {
        SocialLinkDraft {
            platform: self.platform,
            url: self.url,
            icon: self.icon,
            display_order: self.display_order,
        }
    }
}
