use async_trait::async_trait;

use crate::modules::resume::application::ports::incoming::use_cases::ResumeWriteError;
use crate::modules::resume::application::ports::outgoing::BasicInfoData;
use crate::modules::resume::domain::entities::BasicInfo;

#[async_trait]
pub trait UpdateBasicInfoUseCase: Send + Sync {
    async fn execute(&self, data: BasicInfoData) -> Result<BasicInfo, ResumeWriteError>;
}
