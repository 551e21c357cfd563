pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::contact;
pub use modules::content;
pub use modules::presentation;
pub use modules::resource;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::RoleQueryPostgres;
use crate::auth::application::ports::incoming::use_cases::ResolveAdminAccessUseCase;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::ResolveAdminAccessService;
use crate::contact::adapter::outgoing::{build_contact_relay, ContactRelayConfig};
use crate::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;
use crate::contact::application::services::SendContactMessageService;
use crate::content::adapter::outgoing::{
    ExperienceRepositoryPostgres, ProfileRepositoryPostgres, ProjectRepositoryPostgres,
    SkillRepositoryPostgres, SocialLinkRepositoryPostgres,
};
use crate::content::application::content_use_cases::{ContentSet, ContentUseCases};
use crate::presentation::application::domain::icons::IconRegistry;
use crate::presentation::application::ports::incoming::use_cases::GetLandingPageUseCase;
use crate::presentation::application::services::LandingPageService;
use crate::resource::adapter::outgoing::storage::{HttpObjectStorage, StorageConfig};
use crate::resource::adapter::outgoing::ResourceRepositoryPostgres;
use crate::resource::application::domain::policies::UploadPolicy;
use crate::resource::application::resource_use_cases::ResourceUseCases;
use crate::shared::api::{custom_json_config, resource_payload_config};
use crate::shared::cache::{CacheEvent, QueryCache};
use crate::shared::config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;

use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub resources: ResourceUseCases,
    pub admin_access: Arc<dyn ResolveAdminAccessUseCase + Send + Sync>,
    pub contact: Arc<dyn SendContactMessageUseCase + Send + Sync>,
    pub landing: Arc<dyn GetLandingPageUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        if env == "production" {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!("⚠️  Test helper routes are ENABLED for environment: {}", env);
    }

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = config::required("DATABASE_URL")?;
    let host = config::required("HOST")?;
    let port = config::required("PORT")?;
    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config::flag("RUN_MIGRATIONS") {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);
    let cache = Arc::new(QueryCache::new());

    let content = ContentUseCases {
        profile: ContentSet::from_repository(
            Arc::new(ProfileRepositoryPostgres::new(Arc::clone(&db_arc))),
            Arc::clone(&cache),
        ),
        projects: ContentSet::from_repository(
            Arc::new(ProjectRepositoryPostgres::new(Arc::clone(&db_arc))),
            Arc::clone(&cache),
        ),
        experiences: ContentSet::from_repository(
            Arc::new(ExperienceRepositoryPostgres::new(Arc::clone(&db_arc))),
            Arc::clone(&cache),
        ),
        skills: ContentSet::from_repository(
            Arc::new(SkillRepositoryPostgres::new(Arc::clone(&db_arc))),
            Arc::clone(&cache),
        ),
        social_links: ContentSet::from_repository(
            Arc::new(SocialLinkRepositoryPostgres::new(Arc::clone(&db_arc))),
            Arc::clone(&cache),
        ),
    };

    let storage_config = StorageConfig::from_env()?;
    info!(bucket = %storage_config.bucket, "Object storage configured");
    let upload_policy = UploadPolicy::from_env()?;
    let max_upload_bytes = upload_policy.max_file_size_bytes;
    let resources = ResourceUseCases::new(
        Arc::new(ResourceRepositoryPostgres::new(Arc::clone(&db_arc))),
        Arc::new(HttpObjectStorage::new(storage_config)),
        upload_policy,
        Arc::clone(&cache),
    );

    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let admin_access =
        ResolveAdminAccessService::new(Arc::new(RoleQueryPostgres::new(Arc::clone(&db_arc))));

    let contact_relay = build_contact_relay(ContactRelayConfig::from_env()?)?;
    let contact = SendContactMessageService::new(contact_relay);

    let landing = LandingPageService::new(content.clone(), Arc::new(IconRegistry::default()));

    let mut cache_events = cache.subscribe();
    let watched_cache = Arc::clone(&cache);
    tokio::spawn(async move {
        loop {
            match cache_events.recv().await {
                Ok(CacheEvent::Loaded { key, at }) => debug!(%key, %at, "query loaded"),
                Ok(CacheEvent::Failed { key, error }) => {
                    let kept = watched_cache
                        .snapshot(&key)
                        .and_then(|s| s.last_updated.filter(|_| s.data.is_some()));
                    match kept {
                        Some(since) => {
                            warn!(%key, %error, %since, "query failed, keeping last data")
                        }
                        None => warn!(%key, %error, "query failed with nothing cached"),
                    }
                }
                Ok(CacheEvent::Invalidated { key }) => debug!(%key, "query invalidated"),
                Err(RecvError::Lagged(skipped)) => debug!(skipped, "cache event log lagging"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let state = AppState {
        content,
        resources,
        admin_access: Arc::new(admin_access),
        contact: Arc::new(contact),
        landing: Arc::new(landing),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(resource_payload_config(max_upload_bytes))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public content
    cfg.service(crate::content::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_social_links_handler);
    cfg.service(crate::resource::adapter::incoming::web::routes::list_resources_handler);
    // Presentation
    cfg.service(crate::presentation::adapter::incoming::web::routes::get_landing_handler);
    cfg.service(crate::presentation::adapter::incoming::web::routes::stream_typewriter_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::send_contact_handler);
    // Admin (resources before the generic /api/admin/{kind} routes)
    cfg.service(crate::auth::adapter::incoming::web::routes::get_admin_session_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_blank_form_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_seeded_form_handler);
    cfg.service(crate::resource::adapter::incoming::web::routes::upload_resource_handler);
    cfg.service(crate::resource::adapter::incoming::web::routes::delete_resource_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::submit_content_form_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_content_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
