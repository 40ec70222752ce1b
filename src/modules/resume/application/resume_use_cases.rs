use std::sync::Arc;

use crate::modules::resume::application::ports::incoming::use_cases::{
    GetResumeUseCase, ManageBulletsUseCase, ManageEntriesUseCase, ManageSectionsUseCase,
    UpdateBasicInfoUseCase,
};

#[derive(Clone)]
pub struct ResumeUseCases {
    pub get: Arc<dyn GetResumeUseCase + Send + Sync>,
    pub update_basic_info: Arc<dyn UpdateBasicInfoUseCase + Send + Sync>,
    pub sections: Arc<dyn ManageSectionsUseCase + Send + Sync>,
    pub entries: Arc<dyn ManageEntriesUseCase + Send + Sync>,
    pub bullets: Arc<dyn ManageBulletsUseCase + Send + Sync>,
}
