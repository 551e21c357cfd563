use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::contact::application::ports::incoming::use_cases::{
    ContactSubmission, SendContactMessageError,
};
use crate::AppState;

pub const SENT_NOTICE: &str = "Message sent successfully! I'll get back to you soon.";

/// Mirrors the relay contract: `{success: true}` or `{error}`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ContactReply {
    Sent { success: bool, notice: String },
    Failed { error: String },
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactSubmission,
    responses(
        (status = 200, description = "Message relayed", body = ContactReply),
        (status = 400, description = "Rejected before relaying", body = ContactReply),
        (status = 502, description = "Relay failed or answered unexpectedly", body = ContactReply)
    )
)]
#[post("/api/contact")]
pub async fn send_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<ContactSubmission>,
) -> impl Responder {
    match data.contact.execute(payload.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(ContactReply::Sent {
            success: true,
            notice: SENT_NOTICE.to_string(),
        }),
        Err(SendContactMessageError::Invalid(e)) => {
            HttpResponse::BadRequest().json(ContactReply::Failed {
                error: e.to_string(),
            })
        }
        Err(SendContactMessageError::Relay(e)) => {
            HttpResponse::BadGateway().json(ContactReply::Failed {
                error: e.to_string(),
            })
        }
    }
}
