use async_trait::async_trait;
use tracing::info;

use crate::modules::project::domain::entities::Tag;
use crate::modules::tag::application::ports::incoming::use_cases::{
    AttachTagCommand, AttachTagError, AttachTagUseCase,
};
use crate::modules::tag::application::ports::outgoing::TagRepository;

pub struct AttachTagService<R>
where
    R: TagRepository,
{
    repository: R,
}

impl<R> AttachTagService<R>
where
    R: TagRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AttachTagUseCase for AttachTagService<R>
where
    R: TagRepository + Send + Sync,
{
    async fn execute(&self, command: AttachTagCommand) -> Result<Tag, AttachTagError> {
        let tag = self
            .repository
            .find_or_create(command.name(), command.color().cloned())
            .await?;

        self.repository.link(command.project_id(), tag.id).await?;

        info!(
            project_id = command.project_id(),
            tag_id = tag.id,
            "Tag attached to project"
        );

        Ok(tag)
    }
}
