use async_trait::async_trait;
use tracing::debug;

use crate::modules::resume::application::ports::incoming::use_cases::{
    GetResumeError, GetResumeUseCase,
};
use crate::modules::resume::application::ports::outgoing::ResumeQuery;
use crate::modules::resume::domain::assembly::assemble_resume;
use crate::modules::resume::domain::entities::Resume;

pub struct GetResumeService<Q>
where
    Q: ResumeQuery,
{
    query: Q,
}

impl<Q> GetResumeService<Q>
where
    Q: ResumeQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetResumeUseCase for GetResumeService<Q>
where
    Q: ResumeQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Resume, GetResumeError> {
        let rows = self.query.load_rows().await?;
        let resume = assemble_resume(rows);

        debug!(sections = resume.sections.len(), "Resume assembled");

        Ok(resume)
    }
}
