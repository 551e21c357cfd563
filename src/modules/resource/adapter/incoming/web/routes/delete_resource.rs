use actix_web::{delete, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::resource::application::ports::incoming::use_cases::{
    DeleteResourceError, GetResourceError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteResourceQuery {
    /// Must be `true` to perform the deletion.
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceDeleted {
    #[schema(example = "Resource deleted successfully")]
    pub notice: String,
    pub id: Uuid,
}

fn not_found() -> actix_web::HttpResponse {
    ApiResponse::not_found("RESOURCE_NOT_FOUND", "Resource not found")
}

#[utoipa::path(
    delete,
    path = "/api/admin/resources/{id}",
    tag = "resources",
    params(("id" = Uuid, Path, description = "Resource id"), DeleteResourceQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Resource and stored file removed", body = ResourceDeleted),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Resource not found", body = ErrorResponse),
        (status = 428, description = "Confirmation required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/admin/resources/{id}")]
pub async fn delete_resource_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    query: web::Query<DeleteResourceQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    if !query.confirm {
        return match data.resources.get.execute(id).await {
            Ok(resource) => ApiResponse::precondition_required(
                "CONFIRMATION_REQUIRED",
                &format!("Are you sure you want to delete \"{}\"?", resource.title),
            ),
            Err(GetResourceError::NotFound) => not_found(),
            Err(GetResourceError::RepositoryError(e)) => {
                error!("Repository error loading resource {}: {}", id, e);
                ApiResponse::internal_error()
            }
        };
    }

    match data.resources.delete.execute(id).await {
        Ok(resource) => ApiResponse::success(ResourceDeleted {
            notice: "Resource deleted successfully".to_string(),
            id: resource.id,
        }),
        Err(DeleteResourceError::NotFound) => not_found(),
        Err(DeleteResourceError::RepositoryError(e)) => {
            error!("Repository error deleting resource {}: {}", id, e);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "DELETE_FAILED",
                &e,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::resource::application::domain::entities::ResourceCategory;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::resource_fixtures::{
        resource, resource_use_cases, FakeObjectStorage, InMemoryResourceRepository,
    };

    #[actix_web::test]
    async fn test_delete_without_confirm_prompts() {
        let stored = resource("Final deck", ResourceCategory::Project, 0);
        let repo = Arc::new(InMemoryResourceRepository::with(vec![stored.clone()]));
        let app_state = TestAppStateBuilder::default()
            .with_resources(resource_use_cases(
                Arc::clone(&repo),
                Arc::new(FakeObjectStorage::new("resources")),
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(delete_resource_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/resources/{}", stored.id))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PRECONDITION_REQUIRED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"]["message"],
            "Are you sure you want to delete \"Final deck\"?"
        );
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[actix_web::test]
    async fn test_confirmed_delete_removes_record_and_blob() {
        let storage = Arc::new(FakeObjectStorage::new("resources"));
        let mut stored = resource("Final deck", ResourceCategory::Project, 0);
        stored.file_url = storage.seed_object("project/3-deck.pptx");
        let repo = Arc::new(InMemoryResourceRepository::with(vec![stored.clone()]));

        let app_state = TestAppStateBuilder::default()
            .with_resources(resource_use_cases(Arc::clone(&repo), Arc::clone(&storage)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(delete_resource_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/resources/{}?confirm=true", stored.id))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert!(repo.snapshot().is_empty());
        assert!(storage.object_paths().is_empty());
    }

    #[actix_web::test]
    async fn test_delete_unknown_resource_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(delete_resource_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/resources/{}?confirm=true", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
