use async_trait::async_trait;
use serde::Deserialize;

use crate::contact::application::domain::ContactMessage;
use crate::contact::application::ports::outgoing::{ContactRelay, ContactRelayError};

#[derive(Debug, Default, Deserialize)]
struct RelayReply {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

/// Reads the relay's answer. `{success: true}` is the only accepted shape;
/// `{error}` carries its own notice.
fn interpret_reply(status_ok: bool, body: &str) -> Result<(), ContactRelayError> {
    let reply = match serde_json::from_str::<RelayReply>(body) {
        Ok(reply) => reply,
        Err(_) if !status_ok => {
            return Err(ContactRelayError::Transport(format!(
                "relay answered with non-JSON error body: {}",
                body
            )))
        }
        Err(_) => return Err(ContactRelayError::UnexpectedResponse),
    };

    match reply {
        RelayReply {
            success: Some(true),
            ..
        } => Ok(()),
        RelayReply {
            error: Some(error), ..
        } if !error.trim().is_empty() => Err(ContactRelayError::Rejected(error)),
        _ => Err(ContactRelayError::UnexpectedResponse),
    }
}

/// Posts `{name, email, message}` to the hosted `send-contact-email`
/// function.
pub struct FunctionContactRelay {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl FunctionContactRelay {
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl ContactRelay for FunctionContactRelay {
    async fn relay(&self, message: &ContactMessage) -> Result<(), ContactRelayError> {
        let mut request = self.client.post(&self.url).json(message);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key).header("apikey", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContactRelayError::Transport(e.to_string()))?;

        let status_ok = response.status().is_success();
        let body = response
            .text()
            .await
            .map_err(|e| ContactRelayError::Transport(e.to_string()))?;

        interpret_reply(status_ok, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_reply_is_accepted() {
        assert_eq!(interpret_reply(true, r#"{"success":true}"#), Ok(()));
    }

    #[test]
    fn error_reply_surfaces_its_message() {
        let result = interpret_reply(false, r#"{"error":"Mailbox full"}"#);

        assert_eq!(result, Err(ContactRelayError::Rejected("Mailbox full".into())));
        assert_eq!(result.unwrap_err().to_string(), "Mailbox full");
    }

    #[test]
    fn any_other_shape_is_unexpected() {
        for body in [r#"{"success":false}"#, r#"{}"#, r#"{"ok":1}"#, "sent"] {
            let err = interpret_reply(true, body).unwrap_err();
            assert_eq!(err.to_string(), "Unexpected response from server");
        }
    }

    #[test]
    fn non_json_failure_reads_as_transport() {
        let err = interpret_reply(false, "<html>502 Bad Gateway</html>").unwrap_err();

        assert!(matches!(err, ContactRelayError::Transport(_)));
        assert_eq!(
            err.to_string(),
            "Failed to send message. Please try again or email me directly."
        );
    }

    #[tokio::test]
    async fn unreachable_relay_is_a_transport_error() {
        let relay = FunctionContactRelay::new("http://127.0.0.1:1/send-contact-email", None);
        let message = ContactMessage::parse("A", "a@b.com", "hi").unwrap();

        let err = relay.relay(&message).await.unwrap_err();

        assert!(matches!(err, ContactRelayError::Transport(_)));
    }
}
