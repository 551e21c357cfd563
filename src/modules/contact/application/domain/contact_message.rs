use serde::Serialize;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Name must be less than 100 characters")]
    NameTooLong,
    #[error("Message must be less than 2000 characters")]
    MessageTooLong,
}

/// A visitor message that passed local validation. Serializes to the
/// relay payload `{name, email, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    pub fn parse(name: &str, email: &str, message: &str) -> Result<Self, ContactValidationError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactValidationError::MissingFields);
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ContactValidationError::NameTooLong);
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ContactValidationError::MessageTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
