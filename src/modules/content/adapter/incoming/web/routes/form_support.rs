use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::content_use_cases::ContentSet;
use crate::modules::content::application::domain::entities::ContentKind;
use crate::modules::content::application::domain::forms::{ContentForm, FormOptions};
use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteContentError, GetContentError, SaveContentError,
};
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
pub struct FormView<F: Serialize> {
    pub kind: &'static str,
    /// Present when the form edits an existing record.
    pub id: Option<Uuid>,
    pub form: F,
    pub options: FormOptions,
}

/// Submit body: form fields plus the optional identifier that selects
/// update over insert.
#[derive(Debug, Deserialize)]
struct FormSubmission<F> {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(flatten)]
    form: F,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitNotice<R: Serialize> {
    #[schema(example = "Project created!")]
    pub notice: String,
    pub record: R,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteNotice {
    #[schema(example = "Project deleted")]
    pub notice: String,
}

/// Notice such as "Failed to save project: <message>".
fn save_failed(label: &str, status: StatusCode, code: &str, message: &str) -> HttpResponse {
    let notice = format!("Failed to save {}: {}", label.to_lowercase(), message);
    ApiResponse::error(status, code, &notice)
}

//
// ──────────────────────────────────────────────────────────
// Generic flows
// ──────────────────────────────────────────────────────────
//

/// Blank form when `id` is absent, seeded otherwise. The singleton
/// profile seeds from its existing row even without an id.
pub(super) async fn render_form<F: ContentForm>(
    set: &ContentSet<F::Record>,
    id: Option<Uuid>,
) -> HttpResponse {
    let label = <F::Record as ContentKind>::LABEL;

    let record = match id {
        Some(id) => match set.get.execute(id).await {
            Ok(record) => Some(record),
            Err(GetContentError::NotFound) => {
                return ApiResponse::not_found("NOT_FOUND", &format!("{} not found", label));
            }
            Err(GetContentError::RepositoryError(e)) => {
                error!("Repository error loading {} {}: {}", label, id, e);
                return ApiResponse::internal_error();
            }
        },
        None if <F::Record as ContentKind>::SINGLETON => match set.list.execute().await {
            Ok(records) => records.first().cloned(),
            Err(e) => {
                error!("Repository error loading {}: {}", label, e);
                return ApiResponse::internal_error();
            }
        },
        None => None,
    };

    ApiResponse::success(FormView {
        kind: <F::Record as ContentKind>::SLUG,
        id: record.as_ref().map(ContentKind::id),
        form: record.as_ref().map(F::seeded).unwrap_or_default(),
        options: F::options(),
    })
}

pub(super) async fn submit_form<F: ContentForm>(
    set: &ContentSet<F::Record>,
    body: serde_json::Value,
) -> HttpResponse {
    let label = <F::Record as ContentKind>::LABEL;

    let submission: FormSubmission<F> = match serde_json::from_value(body) {
        Ok(s) => s,
        Err(e) => {
            return save_failed(label, StatusCode::BAD_REQUEST, "INVALID_FORM", &e.to_string());
        }
    };

    // Validation happens before any write.
    if let Err(e) = submission.form.validate() {
        return save_failed(label, StatusCode::BAD_REQUEST, "VALIDATION_ERROR", &e.to_string());
    }

    let draft = submission.form.into_draft();

    match set.save.execute(submission.id, draft).await {
        Ok(saved) if saved.created => ApiResponse::created(SubmitNotice {
            notice: format!("{} created!", label),
            record: saved.record,
        }),
        Ok(saved) => ApiResponse::success(SubmitNotice {
            notice: format!("{} updated!", label),
            record: saved.record,
        }),
        Err(SaveContentError::NotFound) => {
            save_failed(label, StatusCode::NOT_FOUND, "NOT_FOUND", "record not found")
        }
        Err(SaveContentError::SingletonExists) => save_failed(
            label,
            StatusCode::CONFLICT,
            "ALREADY_EXISTS",
            &SaveContentError::SingletonExists.to_string(),
        ),
        Err(SaveContentError::RepositoryError(e)) => {
            error!("Repository error saving {}: {}", label, e);
            save_failed(label, StatusCode::INTERNAL_SERVER_ERROR, "SAVE_FAILED", &e)
        }
    }
}

pub(super) async fn delete_record<R: ContentKind>(set: &ContentSet<R>, id: Uuid) -> HttpResponse {
    match set.delete.execute(id).await {
        Ok(()) => ApiResponse::success(DeleteNotice {
            notice: format!("{} deleted", R::LABEL),
        }),
        Err(DeleteContentError::NotFound) => ApiResponse::not_found(
            "NOT_FOUND",
            &format!("Failed to delete {}", R::LABEL.to_lowercase()),
        ),
        Err(DeleteContentError::RepositoryError(e)) => {
            error!("Repository error deleting {} {}: {}", R::LABEL, id, e);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DELETE_FAILED",
                &format!("Failed to delete {}", R::LABEL.to_lowercase()),
            )
        }
    }
}
