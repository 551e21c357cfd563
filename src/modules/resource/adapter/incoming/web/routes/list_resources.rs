use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::resource::application::domain::entities::{
    format_file_size, FileKind, Resource, ResourceCategory,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ResourceListQuery {
    /// `study_material` or `project`; omit for every resource.
    pub category: Option<ResourceCategory>,
}

/// A resource plus its display helpers.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceView {
    #[serde(flatten)]
    pub resource: Resource,
    #[schema(example = "1.5 KB")]
    pub size_label: String,
    pub file_kind: FileKind,
}

impl From<&Resource> for ResourceView {
    fn from(resource: &Resource) -> Self {
        Self {
            size_label: format_file_size(resource.file_size),
            file_kind: FileKind::from_mime(resource.file_type.as_deref()),
            resource: resource.clone(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/resources",
    tag = "resources",
    params(ResourceListQuery),
    responses(
        (status = 200, description = "Resources ordered by display order", body = [ResourceView]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[get("/api/resources")]
pub async fn list_resources_handler(
    query: web::Query<ResourceListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resources.list.execute(query.category).await {
        Ok(resources) => {
            let views: Vec<ResourceView> = resources.iter().map(ResourceView::from).collect();
            ApiResponse::success(views)
        }
        Err(e) => {
            error!("Failed to list resources: {}", e);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "LOAD_FAILED",
                &e.to_string(),
            )
        }
    }
}
