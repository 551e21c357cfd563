mod delete_resource_service;
mod get_resource_service;
mod list_resources_service;
mod upload_resource_service;

pub use delete_resource_service::DeleteResourceService;
pub use get_resource_service::GetResourceService;
pub use list_resources_service::ListResourcesService;
pub use upload_resource_service::UploadResourceService;
