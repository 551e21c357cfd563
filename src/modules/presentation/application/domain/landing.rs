use serde::Serialize;
use utoipa::ToSchema;

use super::icons::{IconRegistry, IconSection, IconView};
use crate::content::application::domain::entities::{
    Experience, Profile, Project, Skill, SocialLink, EXPERIENCE_EDUCATION, EXPERIENCE_WORK,
};

/// One landing section. A failed load leaves `data` empty and carries the
/// store's message; other sections still render. Both empty means there
/// is nothing to show yet.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Section<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Section<T> {
    pub fn loaded(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            data: None,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectShowcase {
    pub active: Vec<Project>,
    pub upcoming: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExperienceCard {
    #[serde(flatten)]
    pub entry: Experience,
    pub glyph: IconView,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Timeline {
    pub work: Vec<ExperienceCard>,
    pub education: Vec<ExperienceCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillCard {
    #[serde(flatten)]
    pub skill: Skill,
    pub glyph: IconView,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<SkillCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SocialCard {
    #[serde(flatten)]
    pub link: SocialLink,
    pub glyph: IconView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Data Analysis",
        description: "Transform raw data into actionable insights with comprehensive analysis and visualization.",
        icon: "BarChart3",
    },
    Service {
        title: "Data Science Solutions",
        description: "Build predictive models and machine learning solutions for business optimization.",
        icon: "Brain",
    },
    Service {
        title: "Dashboard Development",
        description: "Create interactive Power BI dashboards for real-time business monitoring.",
        icon: "LayoutDashboard",
    },
    Service {
        title: "Web Development",
        description: "Build modern, responsive web applications with latest technologies.",
        icon: "Globe",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    pub glyph: IconView,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LandingPage {
    pub profile: Section<Profile>,
    pub projects: Section<ProjectShowcase>,
    pub experiences: Section<Timeline>,
    pub skills: Section<Vec<SkillGroup>>,
    pub social_links: Section<Vec<SocialCard>>,
    pub services: Vec<ServiceCard>,
}

/// Coming-soon projects are listed apart from finished ones.
pub fn showcase(projects: &[Project]) -> ProjectShowcase {
    let (upcoming, active): (Vec<Project>, Vec<Project>) =
        projects.iter().cloned().partition(|p| p.coming_soon);
    ProjectShowcase { active, upcoming }
}

/// Entries with any other `type` are left off the page.
pub fn timeline(experiences: &[Experience], icons: &IconRegistry) -> Timeline {
    let card = |e: &Experience, section| ExperienceCard {
        glyph: icons.render(e.icon.as_deref(), section),
        entry: e.clone(),
    };

    Timeline {
        work: experiences
            .iter()
            .filter(|e| e.entry_type == EXPERIENCE_WORK)
            .map(|e| card(e, IconSection::Work))
            .collect(),
        education: experiences
            .iter()
            .filter(|e| e.entry_type == EXPERIENCE_EDUCATION)
            .map(|e| card(e, IconSection::Education))
            .collect(),
    }
}

/// Groups keep the order in which each category first appears.
pub fn group_skills(skills: &[Skill], icons: &IconRegistry) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        let card = SkillCard {
            glyph: icons.render(skill.icon.as_deref(), IconSection::Skills),
            skill: skill.clone(),
        };
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(card),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![card],
            }),
        }
    }

    groups
}

pub fn social_cards(links: &[SocialLink], icons: &IconRegistry) -> Vec<SocialCard> {
    links
        .iter()
        .map(|link| SocialCard {
            glyph: icons.render(Some(&link.icon), IconSection::Social),
            link: link.clone(),
        })
        .collect()
}

pub fn service_cards(icons: &IconRegistry) -> Vec<ServiceCard> {
    SERVICES
        .iter()
        .map(|s| ServiceCard {
            title: s.title.to_string(),
            description: s.description.to_string(),
            glyph: icons.render(Some(s.icon), IconSection::Services),
        })
        .collect()
}
