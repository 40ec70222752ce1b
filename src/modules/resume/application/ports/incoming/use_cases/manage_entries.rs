use async_trait::async_trait;

use crate::modules::resume::application::ports::incoming::use_cases::ResumeWriteError;
use crate::modules::resume::application::ports::outgoing::EntryData;
use crate::modules::resume::domain::entities::Entry;

#[async_trait]
pub trait ManageEntriesUseCase: Send + Sync {
    async fn create(&self, section_id: i32, data: EntryData) -> Result<Entry, ResumeWriteError>;

    async fn update(&self, entry_id: i32, data: EntryData) -> Result<Entry, ResumeWriteError>;

    async fn delete(&self, entry_id: i32) -> Result<(), ResumeWriteError>;
}
