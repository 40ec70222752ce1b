use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::GetProjectDetailError;
use crate::modules::project::domain::render::RenderedPage;

#[async_trait]
pub trait GetProjectPageUseCase: Send + Sync {
    /// Server-side render of the whole detail page. Component failures are
    /// inline error blocks; only a missing project or a failed load is an `Err`.
    async fn execute(&self, project_id: i32) -> Result<RenderedPage, GetProjectDetailError>;
}
