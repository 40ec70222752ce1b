use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepository;

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: i32) -> Result<(), DeleteProjectError> {
        self.repository.delete_project(project_id).await?;
        info!(project_id, "Project deleted");
        Ok(())
    }
}
