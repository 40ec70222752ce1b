pub mod project_components;
pub mod project_tags;
pub mod project_tech_stack;
pub mod projects;
