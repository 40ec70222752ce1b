use async_trait::async_trait;

use crate::modules::tag::application::ports::outgoing::TagRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DetachTagError {
    #[error("Tag is not linked to this project")]
    NotLinked,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TagRepositoryError> for DetachTagError {
    fn from(err: TagRepositoryError) -> Self {
        match err {
            TagRepositoryError::NotFound => DetachTagError::NotLinked,
            other => DetachTagError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DetachTagUseCase: Send + Sync {
    async fn execute(&self, project_id: i32, tag_id: i32) -> Result<(), DetachTagError>;
}
