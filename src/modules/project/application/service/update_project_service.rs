use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepository, ProjectResult,
};
use crate::modules::project::application::service::create_project_service::validate_project;

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: i32,
        data: ProjectData,
    ) -> Result<ProjectResult, UpdateProjectError> {
        let data = data.normalized();
        validate_project(&data).map_err(UpdateProjectError::Validation)?;

        let updated = self.repository.update_project(project_id, data).await?;
        info!(project_id, "Project updated");

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::*};

    use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepositoryError;
    use crate::tests::support::project_test_fixtures::{sample_project_data, sample_project_result};

    mock! {
        pub ProjectRepositoryMock {}
        #[async_trait]
        impl ProjectRepository for ProjectRepositoryMock {
            async fn create_project(&self, data: ProjectData) -> Result<ProjectResult, ProjectRepositoryError>;
            async fn update_project(&self, project_id: i32, data: ProjectData) -> Result<ProjectResult, ProjectRepositoryError>;
            async fn delete_project(&self, project_id: i32) -> Result<(), ProjectRepositoryError>;
        }
    }

    #[tokio::test]
    async fn execute_success() {
        let mut repository = MockProjectRepositoryMock::new();
        repository
            .expect_update_project()
            .with(eq(3), always())
            .times(1)
            .returning(|id, data| Ok(sample_project_result(id, &data.name)));

        let service = UpdateProjectService::new(repository);
        let result = service.execute(3, sample_project_data("Renamed")).await.unwrap();

        assert_eq!(result.id, 3);
        assert_eq!(result.name, "Renamed");
    }

    #[tokio::test]
    async fn execute_maps_not_found() {
        let mut repository = MockProjectRepositoryMock::new();
        repository
            .expect_update_project()
            .returning(|_, _| Err(ProjectRepositoryError::NotFound));

        let service = UpdateProjectService::new(repository);
        let result = service.execute(3, sample_project_data("Renamed")).await;

        assert!(matches!(result, Err(UpdateProjectError::NotFound)));
    }

    #[tokio::test]
    async fn execute_rejects_blank_name() {
        let mut repository = MockProjectRepositoryMock::new();
        repository.expect_update_project().never();

        let service = UpdateProjectService::new(repository);
        let result = service.execute(3, sample_project_data("")).await;

        assert!(matches!(result, Err(UpdateProjectError::Validation(_))));
    }
}
