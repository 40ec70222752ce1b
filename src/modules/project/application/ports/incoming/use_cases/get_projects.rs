use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;
use crate::modules::project::domain::entities::Project;
use crate::modules::project::domain::listing::{ProjectListFilter, SortOption};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) => GetProjectsError::QueryFailed(msg),
            // An empty list is not an error; NotFound never comes from list_projects.
            ProjectQueryError::NotFound => GetProjectsError::QueryFailed("Not found".to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ProjectListFilter,
        sort: SortOption,
    ) -> Result<Vec<Project>, GetProjectsError>;
}
