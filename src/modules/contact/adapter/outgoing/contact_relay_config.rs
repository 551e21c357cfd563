use crate::shared::config::{self, ConfigError};

/// Where visitor messages go. `CONTACT_RELAY_URL` selects the hosted
/// relay function; without it messages are mailed over SMTP.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactRelayConfig {
    Function { url: String, api_key: Option<String> },
    Smtp(SmtpSettings),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmtpSettings {
    pub transport: SmtpTransportSettings,
    pub from_email: String,
    pub inbox: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SmtpTransportSettings {
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Mailpit, MailHog and friends.
    Local { host: String, port: u16 },
}

impl ContactRelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        match config::optional("CONTACT_RELAY_URL") {
            Some(url) => Ok(Self::Function {
                url,
                api_key: config::optional("CONTACT_RELAY_KEY"),
            }),
            None => Ok(Self::Smtp(SmtpSettings::from_env()?)),
        }
    }
}

impl SmtpSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let transport = if config::optional("RUST_ENV").as_deref() == Some("test") {
            SmtpTransportSettings::Local {
                host: config::optional("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: config::parse_or("SMTP_PORT", 1025)?,
            }
        } else {
            SmtpTransportSettings::Relay {
                server: config::required("SMTP_SERVER")?,
                username: config::required("SMTP_USERNAME")?,
                password: config::required("SMTP_PASSWORD")?,
            }
        };

        Ok(Self {
            transport,
            from_email: config::required("EMAIL_FROM")?,
            inbox: config::required("CONTACT_INBOX")?,
        })
    }
}
