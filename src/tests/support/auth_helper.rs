use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_USER_ID: Uuid = Uuid::from_u128(0x5f1e_7c3a_0000_4000_8000_0000_0000_0001);

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        audience: "authenticated".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_token_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

/// `Authorization` header carrying a fresh token for [`TEST_USER_ID`].
pub fn bearer() -> (&'static str, String) {
    let token = test_token_service()
        .generate_access_token(TEST_USER_ID, Some("admin@example.com"))
        .expect("test token should sign");
    ("Authorization", format!("Bearer {}", token))
}

pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_token_service());
    web::Data::new(provider)
}
