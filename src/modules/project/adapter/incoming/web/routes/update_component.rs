use actix_web::{put, web, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::UpdateComponentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Only the data can change; `component_type` is rejected as an unknown field.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateComponentRequest {
    pub component_data: Value,
}

#[put("/api/admin/projects/components/{id}")]
pub async fn update_component_handler(
    path: web::Path<i32>,
    req: web::Json<UpdateComponentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let component_id = path.into_inner();

    match data
        .project
        .update_component
        .execute(component_id, req.into_inner().component_data)
        .await
    {
        Ok(component) => ApiResponse::success(component),

        Err(UpdateComponentError::NotFound) => {
            ApiResponse::not_found("COMPONENT_NOT_FOUND", "Component not found")
        }

        Err(e @ UpdateComponentError::InvalidData(_)) => {
            ApiResponse::validation_error(&e.to_string())
        }

        Err(UpdateComponentError::RepositoryError(e)) => {
            error!("Repository error updating component {}: {}", component_id, e);
            ApiResponse::internal_error()
        }
    }
}
