use actix_web::{http::StatusCode, post, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::list_resources::ResourceView;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::resource::application::domain::entities::ResourceCategory;
use crate::resource::application::domain::policies::UploadPolicyError;
use crate::resource::application::ports::incoming::use_cases::{
    UploadResourceCommand, UploadResourceError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// File metadata travels in the query string; the body is the raw file.
#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadResourceQuery {
    pub title: String,
    pub description: Option<String>,
    pub category: ResourceCategory,
    /// Original file name, including extension.
    pub file_name: String,
}

#[utoipa::path(
    post,
    path = "/api/admin/resources",
    tag = "resources",
    params(UploadResourceQuery),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Resource uploaded", body = ResourceView),
        (status = 400, description = "Rejected by upload policy", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Storage failure", body = ErrorResponse)
    )
)]
#[post("/api/admin/resources")]
pub async fn upload_resource_handler(
    _admin: AdminUser,
    req: HttpRequest,
    query: web::Query<UploadResourceQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let content_type = req
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    let command = UploadResourceCommand {
        title: query.title,
        description: query.description,
        category: query.category,
        file_name: query.file_name,
        content_type,
        bytes: body.to_vec(),
    };

    match data.resources.upload.execute(command).await {
        Ok(resource) => ApiResponse::created(ResourceView::from(&resource)),

        Err(UploadResourceError::Policy(e @ UploadPolicyError::TooLarge(_))) => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &e.to_string())
        }
        Err(UploadResourceError::Policy(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(UploadResourceError::StorageError(msg)) => {
            error!("Resource upload to storage failed: {}", msg);
            ApiResponse::error(StatusCode::BAD_GATEWAY, "STORAGE_ERROR", &msg)
        }
        Err(UploadResourceError::RepositoryError(msg)) => {
            error!("Resource metadata insert failed: {}", msg);
            ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "UPLOAD_FAILED", &msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::resource_fixtures::{
        resource_use_cases, FakeObjectStorage, InMemoryResourceRepository,
    };

    #[actix_web::test]
    async fn test_upload_creates_resource() {
        let repo = Arc::new(InMemoryResourceRepository::with(vec![]));
        let storage = Arc::new(FakeObjectStorage::new("resources"));
        let app_state = TestAppStateBuilder::default()
            .with_resources(resource_use_cases(Arc::clone(&repo), Arc::clone(&storage)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(upload_resource_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/resources?title=Regression%20notes&category=study_material&file_name=notes.pdf")
            .insert_header(bearer())
            .insert_header(("Content-Type", "application/pdf"))
            .set_payload(vec![7u8; 2048])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "Regression notes");
        assert_eq!(body["data"]["file_type"], "application/pdf");
        assert_eq!(body["data"]["size_label"], "2.0 KB");
        assert_eq!(repo.snapshot().len(), 1);
        assert_eq!(storage.object_paths().len(), 1);
    }

    #[actix_web::test]
    async fn test_disallowed_extension_is_400() {
        let storage = Arc::new(FakeObjectStorage::new("resources"));
        let app_state = TestAppStateBuilder::default()
            .with_resources(resource_use_cases(
                Arc::new(InMemoryResourceRepository::with(vec![])),
                Arc::clone(&storage),
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(upload_resource_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/resources?title=Tool&category=project&file_name=setup.exe")
            .insert_header(bearer())
            .set_payload(vec![1u8; 10])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "File type .exe is not allowed");
        assert!(storage.object_paths().is_empty());
    }

    #[actix_web::test]
    async fn test_upload_requires_admin() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(upload_resource_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/resources?title=Notes&category=project&file_name=a.pdf")
            .set_payload(vec![1u8; 10])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
