use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateComponentCommand, CreateComponentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct CreateComponentRequest {
    pub project_id: i32,
    pub component_type: String,
    /// Object, or a string holding JSON text.
    pub component_data: Value,
}

impl From<CreateComponentRequest> for CreateComponentCommand {
    fn from(req: CreateComponentRequest) -> Self {
        Self {
            project_id: req.project_id,
            component_type: req.component_type,
            component_data: req.component_data,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Appends a component to the end of a project's page.
#[post("/api/admin/projects/components")]
pub async fn create_component_handler(
    req: web::Json<CreateComponentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = CreateComponentCommand::from(req.into_inner());
    let project_id = command.project_id;

    match data.project.create_component.execute(command).await {
        Ok(component) => ApiResponse::created(component),

        Err(e @ CreateComponentError::UnknownType(_))
        | Err(e @ CreateComponentError::InvalidData(_)) => {
            ApiResponse::validation_error(&e.to_string())
        }

        Err(CreateComponentError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(CreateComponentError::RepositoryError(e)) => {
            error!(
                "Repository error creating component for project {}: {}",
                project_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
