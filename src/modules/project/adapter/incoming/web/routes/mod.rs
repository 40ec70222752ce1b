mod create_component;
mod create_project;
mod delete_component;
mod delete_project;
mod get_project;
mod get_project_page;
mod get_projects;
mod update_component;
mod update_project;

pub use create_component::create_component_handler;
pub use create_project::create_project_handler;
pub use delete_component::delete_component_handler;
pub use delete_project::delete_project_handler;
pub use get_project::{get_project_handler, ProjectDetailResponse};
pub use get_project_page::get_project_page_handler;
pub use get_projects::{get_projects_handler, ProjectListResponse};
pub use update_component::update_component_handler;
pub use update_project::update_project_handler;

// utoipa path structs for the OpenAPI document
pub use get_project::__path_get_project_handler;
pub use get_project_page::__path_get_project_page_handler;
pub use get_projects::__path_get_projects_handler;
