mod send_contact_message;

pub use send_contact_message::{
    ContactSubmission, SendContactMessageError, SendContactMessageUseCase,
};
