use crate::modules::resume::application::ports::outgoing::ResumeRepositoryError;

/// Failure of any resume write.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeWriteError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Record not found")]
    NotFound,

    #[error("Parent record not found")]
    ParentNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResumeRepositoryError> for ResumeWriteError {
    fn from(err: ResumeRepositoryError) -> Self {
        match err {
            ResumeRepositoryError::NotFound => ResumeWriteError::NotFound,
            ResumeRepositoryError::ParentNotFound => ResumeWriteError::ParentNotFound,
            ResumeRepositoryError::DatabaseError(msg) => ResumeWriteError::RepositoryError(msg),
        }
    }
}
