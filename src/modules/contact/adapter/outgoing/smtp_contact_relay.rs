use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::Address;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::contact::application::domain::ContactMessage;
use crate::contact::application::ports::outgoing::{ContactRelay, ContactRelayError};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Mails each visitor message to the site owner's inbox with Reply-To set
/// to the visitor.
pub struct SmtpContactRelay {
    mailer: Box<dyn Mailer>,
    from_email: String,
    inbox: String,
}

impl SmtpContactRelay {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str, inbox: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
            inbox: inbox.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
        inbox: &str,
    ) -> Result<Self, lettre::transport::smtp::Error> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email, inbox))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str, inbox: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email, inbox)
    }

    fn compose(&self, message: &ContactMessage) -> Result<Message, String> {
        let mut builder = Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{:?}", e))?)
            .to(self.inbox.parse().map_err(|e| format!("{:?}", e))?);

        // Reply-To only when the visitor typed something mailable
        if let Ok(address) = message.email().parse::<Address>() {
            builder = builder.reply_to(Mailbox::new(Some(message.name().to_string()), address));
        }

        builder
            .subject(format!("New contact message from {}", message.name()))
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Name: {}\nEmail: {}\n\n{}",
                message.name(),
                message.email(),
                message.message()
            ))
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl ContactRelay for SmtpContactRelay {
    async fn relay(&self, message: &ContactMessage) -> Result<(), ContactRelayError> {
        let email = self.compose(message).map_err(ContactRelayError::Transport)?;

        self.mailer
            .send(email)
            .await
            .map_err(ContactRelayError::Transport)
    }
}
