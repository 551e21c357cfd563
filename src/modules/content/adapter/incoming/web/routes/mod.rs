mod admin_forms;
mod form_support;
mod get_content;

pub use admin_forms::*;
pub use form_support::{DeleteNotice, FormView, SubmitNotice};
pub use get_content::*;
