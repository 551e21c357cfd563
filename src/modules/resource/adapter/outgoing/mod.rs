mod resource_repository_postgres;
pub mod sea_orm_entity;
pub mod storage;

pub use resource_repository_postgres::ResourceRepositoryPostgres;
