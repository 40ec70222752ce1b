use std::sync::Arc;

use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    GetTechStackUsageUseCase, LinkTechStackUseCase, ListTechStackUseCase, UnlinkTechStackUseCase,
    UpdateTechStackUseCase,
};

#[derive(Clone)]
pub struct TechStackUseCases {
    pub list: Arc<dyn ListTechStackUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTechStackUseCase + Send + Sync>,
    pub usage: Arc<dyn GetTechStackUsageUseCase + Send + Sync>,
    pub link: Arc<dyn LinkTechStackUseCase + Send + Sync>,
    pub unlink: Arc<dyn UnlinkTechStackUseCase + Send + Sync>,
}
