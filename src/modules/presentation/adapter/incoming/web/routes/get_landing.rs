use actix_web::{get, web, Responder};

use crate::presentation::application::domain::landing::LandingPage;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/landing",
    tag = "landing",
    responses(
        (status = 200, description = "Every landing section, each with its own data or error", body = LandingPage)
    )
)]
#[get("/api/landing")]
pub async fn get_landing_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.landing.execute().await)
}
