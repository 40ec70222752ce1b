use async_trait::async_trait;
use tracing::info;

use crate::modules::resume::application::ports::incoming::use_cases::{
    ResumeWriteError, UpdateBasicInfoUseCase,
};
use crate::modules::resume::application::ports::outgoing::{BasicInfoData, ResumeRepository};
use crate::modules::resume::application::service::resume_validation::validate_basic_info;
use crate::modules::resume::domain::entities::BasicInfo;

pub struct UpdateBasicInfoService<R>
where
    R: ResumeRepository,
{
    repository: R,
}

impl<R> UpdateBasicInfoService<R>
where
    R: ResumeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateBasicInfoUseCase for UpdateBasicInfoService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(&self, data: BasicInfoData) -> Result<BasicInfo, ResumeWriteError> {
        let data = data.normalized();
        validate_basic_info(&data).map_err(ResumeWriteError::Validation)?;

        let saved = self.repository.save_basic_info(data).await?;
        info!("Resume basic info updated");

        Ok(saved)
    }
}
