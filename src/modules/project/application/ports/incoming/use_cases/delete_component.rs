use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::component_repository::ComponentRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteComponentError {
    #[error("Component not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ComponentRepositoryError> for DeleteComponentError {
    fn from(err: ComponentRepositoryError) -> Self {
        match err {
            ComponentRepositoryError::NotFound => DeleteComponentError::NotFound,
            other => DeleteComponentError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteComponentUseCase: Send + Sync {
    async fn execute(&self, component_id: i32) -> Result<(), DeleteComponentError>;
}
