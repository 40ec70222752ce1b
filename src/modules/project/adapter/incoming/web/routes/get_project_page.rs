use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectDetailError;
use crate::modules::project::domain::render::RenderedPage;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Render a project page
///
/// Returns the page header and one block per renderable component.
/// Components with bad data come back as `error` blocks instead of failing
/// the whole page.
#[utoipa::path(
    get,
    path = "/api/projects/{id}/page",
    tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Rendered page", body = inline(SuccessResponse<RenderedPage>)),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[get("/api/projects/{id}/page")]
pub async fn get_project_page_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_page.execute(project_id).await {
        Ok(page) => ApiResponse::success(page),

        Err(GetProjectDetailError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectDetailError::QueryFailed(msg)) => {
            error!("Failed to render project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
