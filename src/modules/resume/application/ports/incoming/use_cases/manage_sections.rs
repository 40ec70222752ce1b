use async_trait::async_trait;

use crate::modules::resume::application::ports::incoming::use_cases::ResumeWriteError;
use crate::modules::resume::application::ports::outgoing::SectionData;
use crate::modules::resume::domain::entities::Section;

#[async_trait]
pub trait ManageSectionsUseCase: Send + Sync {
    async fn create(&self, data: SectionData) -> Result<Section, ResumeWriteError>;

    async fn update(&self, section_id: i32, data: SectionData)
        -> Result<Section, ResumeWriteError>;

    /// Entries and their bullets go with the section.
    async fn delete(&self, section_id: i32) -> Result<(), ResumeWriteError>;
}
