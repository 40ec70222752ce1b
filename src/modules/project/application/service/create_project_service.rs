use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepository, ProjectResult,
};

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: ProjectData) -> Result<ProjectResult, CreateProjectError> {
        let data = data.normalized();
        validate_project(&data).map_err(CreateProjectError::Validation)?;

        let created = self.repository.create_project(data).await?;
        info!(project_id = created.id, "Project created");

        Ok(created)
    }
}

/// Rules shared by create and update.
pub(crate) fn validate_project(data: &ProjectData) -> Result<(), String> {
    if data.name.is_empty() {
        return Err("name must not be empty".to_string());
    }

    if let Some(ended) = data.date_ended {
        if ended < data.date_started {
            return Err("date_ended must not be before date_started".to_string());
        }
    }

    Ok(())
}
