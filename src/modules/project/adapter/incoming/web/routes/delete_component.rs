use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::DeleteComponentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/projects/components/{id}")]
pub async fn delete_component_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let component_id = path.into_inner();

    match data.project.delete_component.execute(component_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteComponentError::NotFound) => {
            ApiResponse::not_found("COMPONENT_NOT_FOUND", "Component not found")
        }

        Err(DeleteComponentError::RepositoryError(e)) => {
            error!("Repository error deleting component {}: {}", component_id, e);
            ApiResponse::internal_error()
        }
    }
}
