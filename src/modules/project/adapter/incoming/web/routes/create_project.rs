use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    req: web::Json<ProjectData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
