use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenClaims;
use crate::shared::config;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

#[derive(Debug, PartialEq)]
enum TokenKind {
    Valid,
    Expired,
    WrongAudience,
    InvalidSignature,
    Malformed,
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Valid" => Ok(TokenKind::Valid),
            "Expired" => Ok(TokenKind::Expired),
            "WrongAudience" => Ok(TokenKind::WrongAudience),
            "InvalidSignature" => Ok(TokenKind::InvalidSignature),
            "Malformed" => Ok(TokenKind::Malformed),
            _ => Err(format!("Unknown token_kind: {}", s)),
        }
    }
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        tracing::error!("🚨 Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

fn mint(kind: &TokenKind, user_id: Uuid, secret: &str, audience: &str) -> Result<String, String> {
    let now = Utc::now().timestamp();

    let (exp, aud, secret) = match kind {
        TokenKind::Valid => (now + 3600, audience, secret),
        // Past the 30 second verification leeway
        TokenKind::Expired => (now - 120, audience, secret),
        TokenKind::WrongAudience => (now + 3600, "anon", secret),
        TokenKind::InvalidSignature => (now + 3600, audience, "wrong-secret"),
        TokenKind::Malformed => return Ok(format!("malformed.{}.token", Uuid::new_v4())),
    };

    let claims = TokenClaims {
        sub: user_id,
        aud: aud.to_string(),
        exp,
        iat: now,
        role: Some("authenticated".to_string()),
        email: None,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Token encoding error: {}", e))
}

/// Mint access tokens shaped like the hosted auth provider's.
/// GET /test/token/{token_kind}/{user_id}
pub async fn generate_test_token(path: web::Path<(String, String)>) -> Result<HttpResponse> {
    let (token_kind_str, user_id_str) = path.into_inner();

    let user_id = Uuid::parse_str(&user_id_str)
        .map_err(|_| actix_web::error::ErrorBadRequest("Invalid UUID format"))?;
    let token_kind: TokenKind = token_kind_str
        .parse()
        .map_err(|e: String| actix_web::error::ErrorBadRequest(e))?;

    tracing::debug!("Generating test token - Kind: {:?}, User ID: {}", token_kind, user_id);

    let secret = config::optional("JWT_SECRET").unwrap_or_else(|| "test-secret".to_string());
    let audience =
        config::optional("JWT_AUDIENCE").unwrap_or_else(|| "authenticated".to_string());

    let token = mint(&token_kind, user_id, &secret, &audience)
        .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route(
                "/token/{token_kind}/{user_id}",
                web::get().to(generate_test_token),
            ),
    );
}
