use async_trait::async_trait;

use crate::modules::reorder::application::ports::outgoing::ReorderRepositoryError;
use crate::modules::reorder::domain::ReorderTarget;
use crate::shared::display_order::ReorderItem;

#[derive(Debug, Clone, PartialEq)]
pub struct ReorderCommand {
    target: ReorderTarget,
    items: Vec<ReorderItem>,
}

impl ReorderCommand {
    pub fn new(target: ReorderTarget, items: Vec<ReorderItem>) -> Self {
        Self { target, items }
    }

    pub fn target(&self) -> ReorderTarget {
        self.target
    }

    pub fn items(&self) -> &[ReorderItem] {
        &self.items
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReorderError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("No row with id {0}")]
    NotFound(i32),

    #[error("Display order conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ReorderRepositoryError> for ReorderError {
    fn from(err: ReorderRepositoryError) -> Self {
        match err {
            ReorderRepositoryError::NotFound(id) => ReorderError::NotFound(id),
            ReorderRepositoryError::Conflict(msg) => ReorderError::Conflict(msg),
            ReorderRepositoryError::DatabaseError(msg) => ReorderError::RepositoryError(msg),
        }
    }
}

/// Rewrites the positions of the listed rows atomically. Returns the number
/// of rows moved.
#[async_trait]
pub trait ReorderUseCase: Send + Sync {
    async fn execute(&self, command: ReorderCommand) -> Result<usize, ReorderError>;
}
