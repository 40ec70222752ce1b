use async_trait::async_trait;
use tracing::info;

use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    UpdateTechStackError, UpdateTechStackUseCase,
};
use crate::modules::tech_stack::application::ports::outgoing::TechStackRepository;
use crate::modules::tech_stack::domain::entities::{TechStackFields, TechStackMaster};

pub struct UpdateTechStackService<R>
where
    R: TechStackRepository,
{
    repository: R,
}

impl<R> UpdateTechStackService<R>
where
    R: TechStackRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateTechStackUseCase for UpdateTechStackService<R>
where
    R: TechStackRepository + Send + Sync,
{
    async fn execute(
        &self,
        tech_id: i32,
        fields: TechStackFields,
    ) -> Result<TechStackMaster, UpdateTechStackError> {
        let updated = self.repository.update_master(tech_id, &fields).await?;

        info!(tech_id, name = %updated.name, "Tech stack master updated");

        Ok(updated)
    }
}
