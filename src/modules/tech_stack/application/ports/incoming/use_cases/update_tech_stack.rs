use async_trait::async_trait;

use crate::modules::tech_stack::application::ports::outgoing::TechStackRepositoryError;
use crate::modules::tech_stack::domain::entities::{TechStackFields, TechStackMaster};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTechStackError {
    #[error("Tech stack item not found")]
    NotFound,

    #[error("Another tech stack item already uses this name")]
    NameTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TechStackRepositoryError> for UpdateTechStackError {
    fn from(err: TechStackRepositoryError) -> Self {
        match err {
            TechStackRepositoryError::NotFound => UpdateTechStackError::NotFound,
            TechStackRepositoryError::NameTaken => UpdateTechStackError::NameTaken,
            other => UpdateTechStackError::RepositoryError(other.to_string()),
        }
    }
}

/// Edits a master record. Every project linking it sees the new values.
#[async_trait]
pub trait UpdateTechStackUseCase: Send + Sync {
    async fn execute(
        &self,
        tech_id: i32,
        fields: TechStackFields,
    ) -> Result<TechStackMaster, UpdateTechStackError>;
}
