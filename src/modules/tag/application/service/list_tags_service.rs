use async_trait::async_trait;

use crate::modules::project::domain::entities::Tag;
use crate::modules::tag::application::ports::incoming::use_cases::{
    ListTagsError, ListTagsUseCase,
};
use crate::modules::tag::application::ports::outgoing::TagRepository;

pub struct ListTagsService<R>
where
    R: TagRepository,
{
    repository: R,
}

impl<R> ListTagsService<R>
where
    R: TagRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListTagsUseCase for ListTagsService<R>
where
    R: TagRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Tag>, ListTagsError> {
        Ok(self.repository.list_tags().await?)
    }
}
