use async_trait::async_trait;

use crate::modules::project::domain::entities::TechStackItem;
use crate::modules::tech_stack::application::ports::outgoing::TechStackRepositoryError;
use crate::modules::tech_stack::domain::entities::TechStackFields;

#[derive(Debug, Clone, PartialEq)]
pub struct LinkTechStackCommand {
    project_id: i32,
    fields: TechStackFields,
}

impl LinkTechStackCommand {
    pub fn new(project_id: i32, fields: TechStackFields) -> Self {
        Self { project_id, fields }
    }

    pub fn project_id(&self) -> i32 {
        self.project_id
    }

    pub fn fields(&self) -> &TechStackFields {
        &self.fields
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LinkTechStackError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Tech stack item is already linked to this project")]
    AlreadyLinked,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TechStackRepositoryError> for LinkTechStackError {
    fn from(err: TechStackRepositoryError) -> Self {
        match err {
            TechStackRepositoryError::ProjectNotFound => LinkTechStackError::ProjectNotFound,
            TechStackRepositoryError::AlreadyLinked => LinkTechStackError::AlreadyLinked,
            other => LinkTechStackError::RepositoryError(other.to_string()),
        }
    }
}

/// Finds or creates the master record by name, then appends it to the
/// project's stack.
#[async_trait]
pub trait LinkTechStackUseCase: Send + Sync {
    async fn execute(
        &self,
        command: LinkTechStackCommand,
    ) -> Result<TechStackItem, LinkTechStackError>;
}
