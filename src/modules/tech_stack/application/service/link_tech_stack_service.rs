use async_trait::async_trait;
use tracing::info;

use crate::modules::project::domain::entities::TechStackItem;
use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    LinkTechStackCommand, LinkTechStackError, LinkTechStackUseCase,
};
use crate::modules::tech_stack::application::ports::outgoing::TechStackRepository;

pub struct LinkTechStackService<R>
where
    R: TechStackRepository,
{
    repository: R,
}

impl<R> LinkTechStackService<R>
where
    R: TechStackRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> LinkTechStackUseCase for LinkTechStackService<R>
where
    R: TechStackRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: LinkTechStackCommand,
    ) -> Result<TechStackItem, LinkTechStackError> {
        let master = self.repository.find_or_create(command.fields()).await?;
        let item = self.repository.link(command.project_id(), &master).await?;

        info!(
            project_id = command.project_id(),
            tech_id = master.id,
            link_id = item.link_id,
            "Tech stack item linked to project"
        );

        Ok(item)
    }
}
