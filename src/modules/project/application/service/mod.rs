pub mod create_component_service;
pub mod create_project_service;
pub mod delete_component_service;
pub mod delete_project_service;
pub mod get_project_detail_service;
pub mod get_project_page_service;
pub mod get_projects_service;
pub mod update_component_service;
pub mod update_project_service;

pub use create_component_service::CreateComponentService;
pub use create_project_service::CreateProjectService;
pub use delete_component_service::DeleteComponentService;
pub use delete_project_service::DeleteProjectService;
pub use get_project_detail_service::GetProjectDetailService;
pub use get_project_page_service::GetProjectPageService;
pub use get_projects_service::GetProjectsService;
pub use update_component_service::UpdateComponentService;
pub use update_project_service::UpdateProjectService;
