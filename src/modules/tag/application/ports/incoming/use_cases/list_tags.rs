use async_trait::async_trait;

use crate::modules::project::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::TagRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTagsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TagRepositoryError> for ListTagsError {
    fn from(err: TagRepositoryError) -> Self {
        ListTagsError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListTagsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Tag>, ListTagsError>;
}
