mod delete_resource;
mod list_resources;
mod upload_resource;

pub use delete_resource::*;
pub use list_resources::*;
pub use upload_resource::*;
