use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;
use crate::modules::project::domain::entities::ProjectDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectDetailError {
    #[error("Project not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectDetailError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::NotFound => GetProjectDetailError::NotFound,
            ProjectQueryError::DatabaseError(msg) => GetProjectDetailError::QueryFailed(msg),
        }
    }
}

/// Loads a project ready for rendering: components sorted by display order
/// and related projects resolved.
#[async_trait]
pub trait GetProjectDetailUseCase: Send + Sync {
    async fn execute(&self, project_id: i32) -> Result<ProjectDetail, GetProjectDetailError>;
}
