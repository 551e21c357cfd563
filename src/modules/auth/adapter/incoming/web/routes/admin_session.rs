use actix_web::{get, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::AdminSessionView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin panel gate for the current session.
///
/// A missing or invalid token is not an error here; it renders the
/// `unauthenticated` state with its sign-in redirect.
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "admin",
    security(("bearer_auth" = []), ()),
    responses(
        (status = 200, description = "Gate state", body = AdminSessionView),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/admin/session")]
pub async fn get_admin_session_handler(
    user: Option<AuthenticatedUser>,
    data: web::Data<AppState>,
) -> impl Responder {
    let gate = data.admin_access.execute(user.map(|u| u.user_id)).await;

    ApiResponse::success(AdminSessionView::from(&gate))
}
