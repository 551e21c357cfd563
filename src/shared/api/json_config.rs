// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PayloadConfig};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Raw upload bodies are capped slightly above the policy limit so the
/// policy, not the extractor, produces the user-facing size error.
pub fn resource_payload_config(max_file_size_bytes: u64) -> PayloadConfig {
    let limit = usize::try_from(max_file_size_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(1024 * 1024);

    PayloadConfig::new(limit)
}
