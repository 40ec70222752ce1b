use actix_web::{put, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Full update: every editable field is replaced.
#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    path: web::Path<i32>,
    req: web::Json<ProjectData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.update.execute(project_id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateProjectError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
