use crate::shared::config::{self, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Expected `aud` claim. The hosted auth provider issues `authenticated`.
    pub audience: String,
    /// Lifetime in seconds of tokens minted locally.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = config::required("JWT_SECRET")?;

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let access_token_expiry: i64 = config::parse_or("JWT_ACCESS_EXPIRY", 3600)?;
        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds".to_string(),
            });
        }

        let audience =
            config::optional("JWT_AUDIENCE").unwrap_or_else(|| "authenticated".to_string());

        Ok(Self {
            secret_key,
            audience,
            access_token_expiry,
        })
    }
}
