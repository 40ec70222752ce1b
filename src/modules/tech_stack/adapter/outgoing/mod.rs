pub mod sea_orm_entity;
mod tech_stack_repository_postgres;

pub use tech_stack_repository_postgres::TechStackRepositoryPostgres;
