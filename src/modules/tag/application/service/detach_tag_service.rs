use async_trait::async_trait;
use tracing::info;

use crate::modules::tag::application::ports::incoming::use_cases::{
    DetachTagError, DetachTagUseCase,
};
use crate::modules::tag::application::ports::outgoing::TagRepository;

pub struct DetachTagService<R>
where
    R: TagRepository,
{
    repository: R,
}

impl<R> DetachTagService<R>
where
    R: TagRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DetachTagUseCase for DetachTagService<R>
where
    R: TagRepository + Send + Sync,
{
    async fn execute(&self, project_id: i32, tag_id: i32) -> Result<(), DetachTagError> {
        self.repository.unlink(project_id, tag_id).await?;

        info!(project_id, tag_id, "Tag detached from project");

        Ok(())
    }
}
