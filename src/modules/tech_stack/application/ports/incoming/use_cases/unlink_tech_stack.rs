use async_trait::async_trait;

use crate::modules::tech_stack::application::ports::outgoing::TechStackRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnlinkTechStackError {
    #[error("Tech stack link not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TechStackRepositoryError> for UnlinkTechStackError {
    fn from(err: TechStackRepositoryError) -> Self {
        match err {
            TechStackRepositoryError::NotFound => UnlinkTechStackError::NotFound,
            other => UnlinkTechStackError::RepositoryError(other.to_string()),
        }
    }
}

/// Removes one project link; the master record stays.
#[async_trait]
pub trait UnlinkTechStackUseCase: Send + Sync {
    async fn execute(&self, link_id: i32) -> Result<(), UnlinkTechStackError>;
}
