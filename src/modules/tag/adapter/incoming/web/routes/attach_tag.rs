use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::tag::application::ports::incoming::use_cases::{
    AttachTagCommand, AttachTagCommandError, AttachTagError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct AttachTagRequest {
    pub project_id: i32,
    pub name: String,
    pub color: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/projects/tags")]
pub async fn attach_tag_handler(
    payload: web::Json<AttachTagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match AttachTagCommand::new(payload.project_id, payload.name, payload.color) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.tag.attach.execute(command).await {
        Ok(tag) => ApiResponse::created(tag),
        Err(err) => map_attach_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: AttachTagCommandError) -> HttpResponse {
    ApiResponse::validation_error(&err.to_string())
}

fn map_attach_error(err: AttachTagError) -> HttpResponse {
    match err {
        AttachTagError::ProjectNotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        AttachTagError::RepositoryError(msg) => {
            error!("Failed to attach tag: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
