pub mod jwt;
mod role_query_postgres;
pub mod sea_orm_entity;

pub use role_query_postgres::RoleQueryPostgres;
