use async_trait::async_trait;
use serde_json::Value;

use crate::modules::project::application::ports::outgoing::component_repository::ComponentRepositoryError;
use crate::modules::project::domain::entities::ProjectComponent;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateComponentError {
    #[error("Component not found")]
    NotFound,

    #[error("Invalid component data: {0}")]
    InvalidData(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ComponentRepositoryError> for UpdateComponentError {
    fn from(err: ComponentRepositoryError) -> Self {
        match err {
            ComponentRepositoryError::NotFound => UpdateComponentError::NotFound,
            other => UpdateComponentError::RepositoryError(other.to_string()),
        }
    }
}

/// Replaces a component's data. The new data is validated against the kind
/// already stored for that component.
#[async_trait]
pub trait UpdateComponentUseCase: Send + Sync {
    async fn execute(
        &self,
        component_id: i32,
        component_data: Value,
    ) -> Result<ProjectComponent, UpdateComponentError>;
}
