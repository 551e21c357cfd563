mod delete_content;
mod get_content;
mod list_content;
mod save_content;

pub use delete_content::{DeleteContentError, DeleteContentUseCase};
pub use get_content::{GetContentError, GetContentUseCase};
pub use list_content::{ListContentError, ListContentUseCase};
pub use save_content::{SaveContentError, SaveContentUseCase, SavedContent};
