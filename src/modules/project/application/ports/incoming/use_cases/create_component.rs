use async_trait::async_trait;
use serde_json::Value;

use crate::modules::project::application::ports::outgoing::component_repository::ComponentRepositoryError;
use crate::modules::project::domain::entities::ProjectComponent;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateComponentCommand {
    pub project_id: i32,
    /// Wire tag, checked against the known kinds.
    pub component_type: String,
    pub component_data: Value,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateComponentError {
    #[error("Unknown component type: {0}")]
    UnknownType(String),

    #[error("Invalid component data: {0}")]
    InvalidData(String),

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ComponentRepositoryError> for CreateComponentError {
    fn from(err: ComponentRepositoryError) -> Self {
        match err {
            ComponentRepositoryError::ProjectNotFound => CreateComponentError::ProjectNotFound,
            other => CreateComponentError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait CreateComponentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateComponentCommand,
    ) -> Result<ProjectComponent, CreateComponentError>;
}
