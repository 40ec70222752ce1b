use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::modules::project::domain::entities::Project;
use crate::modules::project::domain::listing::{
    filter_projects, sort_projects, ProjectListFilter, SortOption,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ProjectListFilter,
        sort: SortOption,
    ) -> Result<Vec<Project>, GetProjectsError> {
        let projects = self.query.list_projects().await?;

        Ok(sort_projects(filter_projects(projects, &filter), sort))
    }
}
