mod create_component;
mod create_project;
mod delete_component;
mod delete_project;
mod get_project_detail;
mod get_project_page;
mod get_projects;
mod update_component;
mod update_project;

pub use create_component::{CreateComponentCommand, CreateComponentError, CreateComponentUseCase};
pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use delete_component::{DeleteComponentError, DeleteComponentUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_project_detail::{GetProjectDetailError, GetProjectDetailUseCase};
pub use get_project_page::GetProjectPageUseCase;
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use update_component::{UpdateComponentError, UpdateComponentUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
