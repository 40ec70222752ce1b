use async_trait::async_trait;

use crate::modules::reorder::domain::ReorderTarget;
use crate::shared::display_order::ReorderItem;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReorderRepositoryError {
    #[error("Row {0} not found")]
    NotFound(i32),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReorderRepository: Send + Sync {
    /// All items are written or none are.
    async fn reorder(
        &self,
        target: ReorderTarget,
        items: &[ReorderItem],
    ) -> Result<(), ReorderRepositoryError>;
}
