use async_trait::async_trait;
use tracing::info;

use crate::modules::resume::application::ports::incoming::use_cases::{
    ManageEntriesUseCase, ResumeWriteError,
};
use crate::modules::resume::application::ports::outgoing::{EntryData, ResumeRepository};
use crate::modules::resume::application::service::resume_validation::validate_entry;
use crate::modules::resume::domain::entities::Entry;

pub struct ManageEntriesService<R>
where
    R: ResumeRepository,
{
    repository: R,
}

impl<R> ManageEntriesService<R>
where
    R: ResumeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ManageEntriesUseCase for ManageEntriesService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn create(&self, section_id: i32, data: EntryData) -> Result<Entry, ResumeWriteError> {
        let data = data.normalized();
        validate_entry(&data).map_err(ResumeWriteError::Validation)?;

        let created = self.repository.create_entry(section_id, data).await?;
        info!(section_id, entry_id = created.id, "Resume entry created");

        Ok(created)
    }

    async fn update(&self, entry_id: i32, data: EntryData) -> Result<Entry, ResumeWriteError> {
        let data = data.normalized();
        validate_entry(&data).map_err(ResumeWriteError::Validation)?;

        Ok(self.repository.update_entry(entry_id, data).await?)
    }

    async fn delete(&self, entry_id: i32) -> Result<(), ResumeWriteError> {
        self.repository.delete_entry(entry_id).await?;
        info!(entry_id, "Resume entry deleted");
        Ok(())
    }
}
