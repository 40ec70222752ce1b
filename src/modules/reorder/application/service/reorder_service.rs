use async_trait::async_trait;
use tracing::info;

use crate::modules::reorder::application::ports::incoming::use_cases::{
    ReorderCommand, ReorderError, ReorderUseCase,
};
use crate::modules::reorder::application::ports::outgoing::ReorderRepository;
use crate::shared::display_order::validate_reorder;

pub struct ReorderService<R>
where
    R: ReorderRepository,
{
    repository: R,
}

impl<R> ReorderService<R>
where
    R: ReorderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReorderUseCase for ReorderService<R>
where
    R: ReorderRepository + Send + Sync,
{
    async fn execute(&self, command: ReorderCommand) -> Result<usize, ReorderError> {
        validate_reorder(command.items()).map_err(|e| ReorderError::Validation(e.to_string()))?;

        if command.items().is_empty() {
            return Ok(0);
        }

        self.repository
            .reorder(command.target(), command.items())
            .await?;

        info!(
            list = command.target().as_str(),
            count = command.items().len(),
            "Display order rewritten"
        );

        Ok(command.items().len())
    }
}
