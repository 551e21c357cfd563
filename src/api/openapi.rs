use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Public portfolio content, downloadable resources and the admin content panel",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Public content
        crate::content::adapter::incoming::web::routes::get_profile_handler,
        crate::content::adapter::incoming::web::routes::get_projects_handler,
        crate::content::adapter::incoming::web::routes::get_experiences_handler,
        crate::content::adapter::incoming::web::routes::get_skills_handler,
        crate::content::adapter::incoming::web::routes::get_social_links_handler,

        // Landing page
        crate::presentation::adapter::incoming::web::routes::get_landing_handler,
        crate::presentation::adapter::incoming::web::routes::stream_typewriter_handler,

        // Resources
        crate::resource::adapter::incoming::web::routes::list_resources_handler,
        crate::resource::adapter::incoming::web::routes::upload_resource_handler,
        crate::resource::adapter::incoming::web::routes::delete_resource_handler,

        // Contact
        crate::contact::adapter::incoming::web::routes::send_contact_handler,

        // Admin
        crate::auth::adapter::incoming::web::routes::get_admin_session_handler,
        crate::content::adapter::incoming::web::routes::get_blank_form_handler,
        crate::content::adapter::incoming::web::routes::get_seeded_form_handler,
        crate::content::adapter::incoming::web::routes::submit_content_form_handler,
        crate::content::adapter::incoming::web::routes::delete_content_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "content", description = "Public portfolio content"),
        (name = "landing", description = "Assembled landing page and hero animation"),
        (name = "resources", description = "Downloadable files"),
        (name = "contact", description = "Visitor messages"),
        (name = "admin", description = "Admin gate and content forms"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the hosted auth provider"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_admin_and_public_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/profile",
            "/api/projects",
            "/api/experiences",
            "/api/skills",
            "/api/social-links",
            "/api/landing",
            "/api/hero/typewriter",
            "/api/resources",
            "/api/contact",
            "/api/admin/session",
            "/api/admin/forms/{kind}",
            "/api/admin/forms/{kind}/{id}",
            "/api/admin/resources",
            "/api/admin/resources/{id}",
            "/api/admin/{kind}",
            "/api/admin/{kind}/{id}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
        assert_eq!(paths.len(), 16);
        assert!(doc
            .components
            .unwrap()
            .security_schemes
            .contains_key("bearer_auth"));
    }
}
