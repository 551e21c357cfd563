mod resolve_admin_access;

pub use resolve_admin_access::ResolveAdminAccessUseCase;
