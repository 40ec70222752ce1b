use async_trait::async_trait;

use crate::modules::resume::domain::entities::ResumeRows;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ResumeQuery: Send + Sync {
    /// Every stored row, hidden sections included.
    async fn load_rows(&self) -> Result<ResumeRows, ResumeQueryError>;
}
