pub mod component_repository;
pub mod project_query;
pub mod project_repository;
