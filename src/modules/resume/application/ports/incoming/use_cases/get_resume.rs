use async_trait::async_trait;

use crate::modules::resume::application::ports::outgoing::ResumeQueryError;
use crate::modules::resume::domain::entities::Resume;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResumeError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ResumeQueryError> for GetResumeError {
    fn from(err: ResumeQueryError) -> Self {
        GetResumeError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetResumeUseCase: Send + Sync {
    async fn execute(&self) -> Result<Resume, GetResumeError>;
}
