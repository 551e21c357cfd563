use actix_web::{delete, get, post, web, HttpResponse, Responder};
use uuid::Uuid;

use super::form_support::{delete_record, render_form, submit_form, DeleteNotice};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::{
    ContentKind, Experience, Profile, Project, Skill, SocialLink,
};
use crate::modules::content::application::domain::forms::{
    ExperienceForm, ProfileForm, ProjectForm, SkillForm, SocialLinkForm,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin editor tabs backed by a content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentSection {
    Profile,
    Projects,
    Experiences,
    Skills,
    SocialLinks,
}

impl ContentSection {
    fn from_slug(slug: &str) -> Option<Self> {
        [
            (Profile::SLUG, Self::Profile),
            (Project::SLUG, Self::Projects),
            (Experience::SLUG, Self::Experiences),
            (Skill::SLUG, Self::Skills),
            (SocialLink::SLUG, Self::SocialLinks),
        ]
        .into_iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, section)| section)
    }
}

fn unknown_kind(kind: &str) -> HttpResponse {
    ApiResponse::not_found(
        "UNKNOWN_CONTENT_KIND",
        &format!("Unknown content kind: {}", kind),
    )
}

async fn render(data: &AppState, kind: &str, id: Option<Uuid>) -> HttpResponse {
    let content = &data.content;
    match ContentSection::from_slug(kind) {
        Some(ContentSection::Profile) => render_form::<ProfileForm>(&content.profile, id).await,
        Some(ContentSection::Projects) => render_form::<ProjectForm>(&content.projects, id).await,
        Some(ContentSection::Experiences) => {
            render_form::<ExperienceForm>(&content.experiences, id).await
        }
        Some(ContentSection::Skills) => render_form::<SkillForm>(&content.skills, id).await,
        Some(ContentSection::SocialLinks) => {
            render_form::<SocialLinkForm>(&content.social_links, id).await
        }
        None => unknown_kind(kind),
    }
}

/// Blank form for `kind` with its defaults and option lists.
#[utoipa::path(
    get,
    path = "/api/admin/forms/{kind}",
    tag = "admin",
    params(("kind" = String, Path, description = "profile, projects, experiences, skills or social-links")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Form view; the singleton profile is seeded from the stored row", body = serde_json::Value),
        (status = 401, description = "No valid token", body = ErrorResponse),
        (status = 403, description = "Signed in without the admin role", body = ErrorResponse),
        (status = 404, description = "Unknown content kind", body = ErrorResponse)
    )
)]
#[get("/api/admin/forms/{kind}")]
pub async fn get_blank_form_handler(
    _admin: AdminUser,
    kind: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    render(&data, &kind, None).await
}

#[utoipa::path(
    get,
    path = "/api/admin/forms/{kind}/{id}",
    tag = "admin",
    params(
        ("kind" = String, Path, description = "Content kind slug"),
        ("id" = Uuid, Path, description = "Record to edit")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Form seeded from the record", body = serde_json::Value),
        (status = 404, description = "Unknown kind or record", body = ErrorResponse)
    )
)]
#[get("/api/admin/forms/{kind}/{id}")]
pub async fn get_seeded_form_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (kind, id) = path.into_inner();
    render(&data, &kind, Some(id)).await
}

/// Creates a record, or replaces one when the body carries `id`.
#[utoipa::path(
    post,
    path = "/api/admin/{kind}",
    tag = "admin",
    params(("kind" = String, Path, description = "Content kind slug")),
    request_body = serde_json::Value,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Created", body = serde_json::Value),
        (status = 200, description = "Updated", body = serde_json::Value),
        (status = 400, description = "Form failed validation; nothing written", body = ErrorResponse),
        (status = 409, description = "Profile already exists", body = ErrorResponse),
        (status = 500, description = "Store rejected the write", body = ErrorResponse)
    )
)]
#[post("/api/admin/{kind}")]
pub async fn submit_content_form_handler(
    _admin: AdminUser,
    kind: web::Path<String>,
    body: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let content = &data.content;
    let body = body.into_inner();

    match ContentSection::from_slug(&kind) {
        Some(ContentSection::Profile) => submit_form::<ProfileForm>(&content.profile, body).await,
        Some(ContentSection::Projects) => submit_form::<ProjectForm>(&content.projects, body).await,
        Some(ContentSection::Experiences) => {
            submit_form::<ExperienceForm>(&content.experiences, body).await
        }
        Some(ContentSection::Skills) => submit_form::<SkillForm>(&content.skills, body).await,
        Some(ContentSection::SocialLinks) => {
            submit_form::<SocialLinkForm>(&content.social_links, body).await
        }
        None => unknown_kind(&kind),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/{kind}/{id}",
    tag = "admin",
    params(
        ("kind" = String, Path, description = "Content kind slug"),
        ("id" = Uuid, Path, description = "Record to delete")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Deleted", body = DeleteNotice),
        (status = 404, description = "Unknown kind or record", body = ErrorResponse),
        (status = 500, description = "Store rejected the delete", body = ErrorResponse)
    )
)]
#[delete("/api/admin/{kind}/{id}")]
pub async fn delete_content_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (kind, id) = path.into_inner();
    let content = &data.content;

    match ContentSection::from_slug(&kind) {
        Some(ContentSection::Profile) => delete_record(&content.profile, id).await,
        Some(ContentSection::Projects) => delete_record(&content.projects, id).await,
        Some(ContentSection::Experiences) => delete_record(&content.experiences, id).await,
        Some(ContentSection::Skills) => delete_record(&content.skills, id).await,
        Some(ContentSection::SocialLinks) => delete_record(&content.social_links, id).await,
        None => unknown_kind(&kind),
    }
}
