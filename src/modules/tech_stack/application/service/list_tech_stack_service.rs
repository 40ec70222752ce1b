use async_trait::async_trait;

use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    ListTechStackError, ListTechStackUseCase,
};
use crate::modules::tech_stack::application::ports::outgoing::TechStackRepository;
use crate::modules::tech_stack::domain::entities::TechStackMaster;

pub struct ListTechStackService<R>
where
    R: TechStackRepository,
{
    repository: R,
}

impl<R> ListTechStackService<R>
where
    R: TechStackRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListTechStackUseCase for ListTechStackService<R>
where
    R: TechStackRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<TechStackMaster>, ListTechStackError> {
        Ok(self.repository.list_masters().await?)
    }
}
