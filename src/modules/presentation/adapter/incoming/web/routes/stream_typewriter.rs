use actix_web::{get, web, HttpResponse};
use futures::StreamExt;
use tracing::warn;

use crate::presentation::application::domain::typewriter::Typewriter;
use crate::presentation::application::services::typewriter_frames;
use crate::AppState;

/// Server-sent events, one `data:` line of `TypewriterFrame` JSON per
/// frame, for as long as the client stays connected.
#[utoipa::path(
    get,
    path = "/api/hero/typewriter",
    tag = "landing",
    responses(
        (status = 200, description = "Endless text/event-stream of typewriter frames", content_type = "text/event-stream", body = crate::presentation::application::domain::typewriter::TypewriterFrame)
    )
)]
#[get("/api/hero/typewriter")]
pub async fn stream_typewriter_handler(data: web::Data<AppState>) -> HttpResponse {
    let roles = match data.content.profile.list.execute().await {
        Ok(profiles) => profiles
            .first()
            .map(|p| p.roles.clone())
            .unwrap_or_default(),
        Err(e) => {
            warn!("Typewriter falling back to default role: {}", e);
            Vec::new()
        }
    };

    let events = typewriter_frames(Typewriter::new(roles)).map(|frame| {
        serde_json::to_string(&frame)
            .map(|json| web::Bytes::from(format!("data: {}\n\n", json)))
            .map_err(actix_web::error::ErrorInternalServerError)
    });

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(events)
}
