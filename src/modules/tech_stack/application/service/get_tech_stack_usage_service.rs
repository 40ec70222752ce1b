use async_trait::async_trait;

use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    GetTechStackUsageError, GetTechStackUsageUseCase,
};
use crate::modules::tech_stack::application::ports::outgoing::TechStackRepository;
use crate::modules::tech_stack::domain::entities::TechUsage;

pub struct GetTechStackUsageService<R>
where
    R: TechStackRepository,
{
    repository: R,
}

impl<R> GetTechStackUsageService<R>
where
    R: TechStackRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetTechStackUsageUseCase for GetTechStackUsageService<R>
where
    R: TechStackRepository + Send + Sync,
{
    async fn execute(&self, tech_id: i32) -> Result<TechUsage, GetTechStackUsageError> {
        Ok(self.repository.usage(tech_id).await?)
    }
}
