use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateComponentUseCase, CreateProjectUseCase, DeleteComponentUseCase, DeleteProjectUseCase,
    GetProjectDetailUseCase, GetProjectPageUseCase, GetProjectsUseCase, UpdateComponentUseCase,
    UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_detail: Arc<dyn GetProjectDetailUseCase + Send + Sync>,
    pub get_page: Arc<dyn GetProjectPageUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    pub create_component: Arc<dyn CreateComponentUseCase + Send + Sync>,
    pub update_component: Arc<dyn UpdateComponentUseCase + Send + Sync>,
    pub delete_component: Arc<dyn DeleteComponentUseCase + Send + Sync>,
}
