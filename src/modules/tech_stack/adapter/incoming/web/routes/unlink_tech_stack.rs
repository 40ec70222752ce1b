use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::tech_stack::application::ports::incoming::use_cases::UnlinkTechStackError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/projects/tech-stack/{link_id}")]
pub async fn unlink_tech_stack_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let link_id = path.into_inner();

    match data.tech_stack.unlink.execute(link_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(UnlinkTechStackError::NotFound) => {
            ApiResponse::not_found("TECH_STACK_LINK_NOT_FOUND", "Tech stack link not found")
        }

        Err(UnlinkTechStackError::RepositoryError(msg)) => {
            error!("Failed to remove tech stack link {}: {}", link_id, msg);
            ApiResponse::internal_error()
        }
    }
}
