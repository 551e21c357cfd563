mod contact_relay_config;
mod function_contact_relay;
mod smtp_contact_relay;

use std::sync::Arc;

pub use contact_relay_config::{ContactRelayConfig, SmtpSettings, SmtpTransportSettings};
pub use function_contact_relay::FunctionContactRelay;
pub use smtp_contact_relay::{Mailer, SmtpContactRelay};

use crate::contact::application::ports::outgoing::ContactRelay;
use crate::shared::config::ConfigError;

pub fn build_contact_relay(
    config: ContactRelayConfig,
) -> Result<Arc<dyn ContactRelay + Send + Sync>, ConfigError> {
    match config {
        ContactRelayConfig::Function { url, api_key } => {
            Ok(Arc::new(FunctionContactRelay::new(url, api_key)))
        }
        ContactRelayConfig::Smtp(settings) => {
            let relay = match settings.transport {
                SmtpTransportSettings::Relay {
                    server,
                    username,
                    password,
                } => SmtpContactRelay::new(
                    &server,
                    &username,
                    &password,
                    &settings.from_email,
                    &settings.inbox,
                )
                .map_err(|e| ConfigError::Invalid {
                    key: "SMTP_SERVER",
                    reason: e.to_string(),
                })?,
                SmtpTransportSettings::Local { host, port } => {
                    SmtpContactRelay::new_local(&host, port, &settings.from_email, &settings.inbox)
                }
            };
            Ok(Arc::new(relay))
        }
    }
}
