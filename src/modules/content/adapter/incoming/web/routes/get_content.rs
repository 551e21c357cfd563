use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::content::application::domain::entities::{
    ContentKind, Experience, Profile, Project, Skill, SocialLink,
};
use crate::modules::content::application::ports::incoming::use_cases::ListContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Public reads
// ──────────────────────────────────────────────────────────
// Every read goes through the shared query cache. Errors are
// surfaced as-is; there is no fallback data.
//

fn list_failed<R: ContentKind>(e: ListContentError) -> actix_web::HttpResponse {
    error!("Failed to load {}: {}", R::KEY, e);
    ApiResponse::error(
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        "LOAD_FAILED",
        &e.to_string(),
    )
}

/// Singleton profile: `data` is `null` when no row exists yet.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "content",
    responses(
        (status = 200, description = "Profile or null", body = Profile),
        (status = 500, description = "Store unavailable", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.profile.list.execute().await {
        Ok(profiles) => ApiResponse::success(profiles.first().cloned()),
        Err(e) => list_failed::<Profile>(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    responses((status = 200, description = "Projects by display order", body = [Project]))
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.projects.list.execute().await {
        Ok(projects) => ApiResponse::success(projects.as_ref().clone()),
        Err(e) => list_failed::<Project>(e),
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExperienceFilter {
    /// `work` or `education`
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "content",
    params(ExperienceFilter),
    responses((status = 200, description = "Experience entries by display order", body = [Experience]))
)]
#[get("/api/experiences")]
pub async fn get_experiences_handler(
    filter: web::Query<ExperienceFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.experiences.list.execute().await {
        Ok(entries) => {
            let entries: Vec<Experience> = entries
                .iter()
                .filter(|e| {
                    filter
                        .entry_type
                        .as_deref()
                        .map_or(true, |t| e.entry_type == t)
                })
                .cloned()
                .collect();
            ApiResponse::success(entries)
        }
        Err(e) => list_failed::<Experience>(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "content",
    responses((status = 200, description = "Skills by display order", body = [Skill]))
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.skills.list.execute().await {
        Ok(skills) => ApiResponse::success(skills.as_ref().clone()),
        Err(e) => list_failed::<Skill>(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/social-links",
    tag = "content",
    responses((status = 200, description = "Social links by display order", body = [SocialLink]))
)]
#[get("/api/social-links")]
pub async fn get_social_links_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.social_links.list.execute().await {
        Ok(links) => ApiResponse::success(links.as_ref().clone()),
        Err(e) => list_failed::<SocialLink>(e),
    }
}
