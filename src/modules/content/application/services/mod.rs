mod delete_content_service;
mod get_content_service;
mod list_content_service;
mod save_content_service;

pub use delete_content_service::DeleteContentService;
pub use get_content_service::GetContentService;
pub use list_content_service::ListContentService;
pub use save_content_service::SaveContentService;
