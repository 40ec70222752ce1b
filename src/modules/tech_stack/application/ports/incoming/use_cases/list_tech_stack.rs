use async_trait::async_trait;

use crate::modules::tech_stack::application::ports::outgoing::TechStackRepositoryError;
use crate::modules::tech_stack::domain::entities::TechStackMaster;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTechStackError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TechStackRepositoryError> for ListTechStackError {
    fn from(err: TechStackRepositoryError) -> Self {
        ListTechStackError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListTechStackUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TechStackMaster>, ListTechStackError>;
}
