use actix_web::{delete, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::tag::application::ports::incoming::use_cases::DetachTagError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectTagPath {
    pub project_id: i32,
    pub tag_id: i32,
}

#[delete("/api/admin/projects/{project_id}/tags/{tag_id}")]
pub async fn detach_tag_handler(
    path: web::Path<ProjectTagPath>,
    data: web::Data<AppState>,
) -> impl Responder {
    let path = path.into_inner();

    match data.tag.detach.execute(path.project_id, path.tag_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DetachTagError::NotLinked) => ApiResponse::not_found(
            "TAG_NOT_LINKED",
            "Tag is not linked to this project",
        ),

        Err(DetachTagError::RepositoryError(msg)) => {
            error!(
                "Failed to detach tag {} from project {}: {}",
                path.tag_id, path.project_id, msg
            );
            ApiResponse::internal_error()
        }
    }
}
