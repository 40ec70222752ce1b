// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::domain::entities::{Project, ProjectDetail, RelatedProject};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-side, joins tags, tech stack and components)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Every project with its tags and tech stack. Filtering and sorting
    /// happen in the application layer.
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectQueryError>;

    /// One project with colour and components. Related projects are left
    /// empty; callers resolve them with [`ProjectQuery::find_related`].
    async fn get_project_detail(&self, project_id: i32)
        -> Result<ProjectDetail, ProjectQueryError>;

    /// Summaries for the given ids. Missing ids are simply absent.
    async fn find_related(
        &self,
        project_ids: &[i32],
    ) -> Result<Vec<RelatedProject>, ProjectQueryError>;
}
