use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectDetailError;
use crate::modules::project::domain::entities::ProjectDetail;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectDetailResponse {
    pub project: ProjectDetail,
}

/// Get a project
///
/// Returns the project with its tags, tech stack, components sorted by
/// display order and the summaries of related projects.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<ProjectDetailResponse>)),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_detail.execute(project_id).await {
        Ok(project) => ApiResponse::success(ProjectDetailResponse { project }),

        Err(GetProjectDetailError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectDetailError::QueryFailed(msg)) => {
            error!("Failed to load project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
