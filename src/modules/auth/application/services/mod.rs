mod resolve_admin_access_service;

pub use resolve_admin_access_service::ResolveAdminAccessService;
