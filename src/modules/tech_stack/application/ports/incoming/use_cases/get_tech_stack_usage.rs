use async_trait::async_trait;

use crate::modules::tech_stack::application::ports::outgoing::TechStackRepositoryError;
use crate::modules::tech_stack::domain::entities::TechUsage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTechStackUsageError {
    #[error("Tech stack item not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TechStackRepositoryError> for GetTechStackUsageError {
    fn from(err: TechStackRepositoryError) -> Self {
        match err {
            TechStackRepositoryError::NotFound => GetTechStackUsageError::NotFound,
            other => GetTechStackUsageError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetTechStackUsageUseCase: Send + Sync {
    async fn execute(&self, tech_id: i32) -> Result<TechUsage, GetTechStackUsageError>;
}
