use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for DeleteProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
            ProjectRepositoryError::DatabaseError(msg) => DeleteProjectError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i32) -> Result<(), DeleteProjectError>;
}
