use async_trait::async_trait;
use mockall::mock;

use crate::modules::resume::application::ports::outgoing::{
    BasicInfoData, BulletData, EntryData, ResumeRepository, ResumeRepositoryError, SectionData,
};
use crate::modules::resume::domain::entities::{BasicInfo, Bullet, Entry, Section};

mock! {
    pub ResumeRepositoryMock {}
    #[async_trait]
    impl ResumeRepository for ResumeRepositoryMock {
        async fn save_basic_info(&self, data: BasicInfoData) -> Result<BasicInfo, ResumeRepositoryError>;
        async fn create_section(&self, data: SectionData) -> Result<Section, ResumeRepositoryError>;
        async fn update_section(&self, section_id: i32, data: SectionData) -> Result<Section, ResumeRepositoryError>;
        async fn delete_section(&self, section_id: i32) -> Result<(), ResumeRepositoryError>;
        async fn create_entry(&self, section_id: i32, data: EntryData) -> Result<Entry, ResumeRepositoryError>;
        async fn update_entry(&self, entry_id: i32, data: EntryData) -> Result<Entry, ResumeRepositoryError>;
        async fn delete_entry(&self, entry_id: i32) -> Result<(), ResumeRepositoryError>;
        async fn create_bullet(&self, entry_id: i32, data: BulletData) -> Result<Bullet, ResumeRepositoryError>;
        async fn update_bullet(&self, bullet_id: i32, data: BulletData) -> Result<Bullet, ResumeRepositoryError>;
        async fn delete_bullet(&self, bullet_id: i32) -> Result<(), ResumeRepositoryError>;
    }
}
