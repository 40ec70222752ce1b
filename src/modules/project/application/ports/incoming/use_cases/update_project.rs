use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepositoryError, ProjectResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for UpdateProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
            ProjectRepositoryError::DatabaseError(msg) => UpdateProjectError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: i32,
        data: ProjectData,
    ) -> Result<ProjectResult, UpdateProjectError>;
}
