mod experience_repository_postgres;
mod profile_repository_postgres;
mod project_repository_postgres;
pub mod sea_orm_entity;
mod skill_repository_postgres;
mod social_link_repository_postgres;
mod sql_support;

pub use experience_repository_postgres::ExperienceRepositoryPostgres;
pub use profile_repository_postgres::ProfileRepositoryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
pub use skill_repository_postgres::SkillRepositoryPostgres;
pub use social_link_repository_postgres::SocialLinkRepositoryPostgres;
