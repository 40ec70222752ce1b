use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepositoryError, ProjectResult,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for CreateProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        CreateProjectError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: ProjectData) -> Result<ProjectResult, CreateProjectError>;
}
