mod delete_resource;
mod get_resource;
mod list_resources;
mod upload_resource;

pub use delete_resource::{DeleteResourceError, DeleteResourceUseCase};
pub use get_resource::{GetResourceError, GetResourceUseCase};
pub use list_resources::{ListResourcesError, ListResourcesUseCase};
pub use upload_resource::{UploadResourceCommand, UploadResourceError, UploadResourceUseCase};
