use async_trait::async_trait;
use tracing::info;

use crate::modules::resume::application::ports::incoming::use_cases::{
    ManageSectionsUseCase, ResumeWriteError,
};
use crate::modules::resume::application::ports::outgoing::{ResumeRepository, SectionData};
use crate::modules::resume::application::service::resume_validation::validate_section;
use crate::modules::resume::domain::entities::Section;

pub struct ManageSectionsService<R>
where
    R: ResumeRepository,
{
    repository: R,
}

impl<R> ManageSectionsService<R>
where
    R: ResumeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ManageSectionsUseCase for ManageSectionsService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn create(&self, data: SectionData) -> Result<Section, ResumeWriteError> {
        let data = data.normalized();
        validate_section(&data).map_err(ResumeWriteError::Validation)?;

        let created = self.repository.create_section(data).await?;
        info!(section_id = created.id, "Resume section created");

        Ok(created)
    }

    async fn update(
        &self,
        section_id: i32,
        data: SectionData,
    ) -> Result<Section, ResumeWriteError> {
        let data = data.normalized();
        validate_section(&data).map_err(ResumeWriteError::Validation)?;

        Ok(self.repository.update_section(section_id, data).await?)
    }

    async fn delete(&self, section_id: i32) -> Result<(), ResumeWriteError> {
        self.repository.delete_section(section_id).await?;
        info!(section_id, "Resume section deleted");
        Ok(())
    }
}
