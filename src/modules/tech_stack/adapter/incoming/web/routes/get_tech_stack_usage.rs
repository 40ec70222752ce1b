use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::tech_stack::application::ports::incoming::use_cases::GetTechStackUsageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/tech-stack/{id}/usage")]
pub async fn get_tech_stack_usage_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let tech_id = path.into_inner();

    match data.tech_stack.usage.execute(tech_id).await {
        Ok(usage) => ApiResponse::success(usage),

        Err(GetTechStackUsageError::NotFound) => {
            ApiResponse::not_found("TECH_STACK_NOT_FOUND", "Tech stack item not found")
        }

        Err(GetTechStackUsageError::RepositoryError(msg)) => {
            error!("Failed to load usage of tech stack item {}: {}", tech_id, msg);
            ApiResponse::internal_error()
        }
    }
}
