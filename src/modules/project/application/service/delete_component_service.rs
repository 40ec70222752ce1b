use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteComponentError, DeleteComponentUseCase,
};
use crate::modules::project::application::ports::outgoing::component_repository::ComponentRepository;

pub struct DeleteComponentService<R>
where
    R: ComponentRepository,
{
    repository: R,
}

impl<R> DeleteComponentService<R>
where
    R: ComponentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteComponentUseCase for DeleteComponentService<R>
where
    R: ComponentRepository + Send + Sync,
{
    async fn execute(&self, component_id: i32) -> Result<(), DeleteComponentError> {
        self.repository.delete_component(component_id).await?;
        info!(component_id, "Component deleted");
        Ok(())
    }
}
