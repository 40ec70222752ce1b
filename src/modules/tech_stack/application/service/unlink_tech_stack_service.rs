use async_trait::async_trait;
use tracing::info;

use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    UnlinkTechStackError, UnlinkTechStackUseCase,
};
use crate::modules::tech_stack::application::ports::outgoing::TechStackRepository;

pub struct UnlinkTechStackService<R>
where
    R: TechStackRepository,
{
    repository: R,
}

impl<R> UnlinkTechStackService<R>
where
    R: TechStackRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UnlinkTechStackUseCase for UnlinkTechStackService<R>
where
    R: TechStackRepository + Send + Sync,
{
    async fn execute(&self, link_id: i32) -> Result<(), UnlinkTechStackError> {
        self.repository.unlink(link_id).await?;
        info!(link_id, "Tech stack link removed");
        Ok(())
    }
}
