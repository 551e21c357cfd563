pub mod user_roles;
