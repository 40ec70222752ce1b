use async_trait::async_trait;

use crate::modules::project::domain::entities::Tag;
use crate::modules::tag::application::ports::incoming::use_cases::{
    UpdateTagError, UpdateTagUseCase,
};
use crate::modules::tag::application::ports::outgoing::TagRepository;

pub struct UpdateTagService<R>
where
    R: TagRepository,
{
    repository: R,
}

impl<R> UpdateTagService<R>
where
    R: TagRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateTagUseCase for UpdateTagService<R>
where
    R: TagRepository + Send + Sync,
{
    async fn execute(&self, tag_id: i32, color: Option<String>) -> Result<Tag, UpdateTagError> {
        let color = color
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(self.repository.update_color(tag_id, color).await?)
    }
}
