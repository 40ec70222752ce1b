use async_trait::async_trait;

use crate::modules::project::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::TagRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTagError {
    #[error("Tag not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TagRepositoryError> for UpdateTagError {
    fn from(err: TagRepositoryError) -> Self {
        match err {
            TagRepositoryError::NotFound => UpdateTagError::NotFound,
            other => UpdateTagError::RepositoryError(other.to_string()),
        }
    }
}

/// Changes a master tag's colour; every linked project sees the change.
#[async_trait]
pub trait UpdateTagUseCase: Send + Sync {
    async fn execute(&self, tag_id: i32, color: Option<String>) -> Result<Tag, UpdateTagError>;
}
