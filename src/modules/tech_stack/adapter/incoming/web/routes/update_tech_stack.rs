use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::tech_stack::application::ports::incoming::use_cases::UpdateTechStackError;
use crate::modules::tech_stack::domain::entities::TechStackFields;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateTechStackRequest {
    pub name: String,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

/// Edits the master record, so the change shows on every linked project.
#[put("/api/admin/tech-stack/{id}")]
pub async fn update_tech_stack_handler(
    path: web::Path<i32>,
    payload: web::Json<UpdateTechStackRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let tech_id = path.into_inner();
    let payload = payload.into_inner();

    let fields = match TechStackFields::new(payload.name, payload.color, payload.image_url) {
        Ok(fields) => fields,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.tech_stack.update.execute(tech_id, fields).await {
        Ok(master) => ApiResponse::success(master),

        Err(UpdateTechStackError::NotFound) => {
            ApiResponse::not_found("TECH_STACK_NOT_FOUND", "Tech stack item not found")
        }

        Err(e @ UpdateTechStackError::NameTaken) => {
            ApiResponse::conflict("TECH_STACK_NAME_TAKEN", &e.to_string())
        }

        Err(UpdateTechStackError::RepositoryError(msg)) => {
            error!("Failed to update tech stack item {}: {}", tech_id, msg);
            ApiResponse::internal_error()
        }
    }
}
