use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::tag::application::ports::incoming::use_cases::UpdateTagError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateTagRequest {
    pub color: Option<String>,
}

#[put("/api/admin/tags/{id}")]
pub async fn update_tag_handler(
    path: web::Path<i32>,
    payload: web::Json<UpdateTagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let tag_id = path.into_inner();

    match data.tag.update.execute(tag_id, payload.into_inner().color).await {
        Ok(tag) => ApiResponse::success(tag),

        Err(UpdateTagError::NotFound) => ApiResponse::not_found("TAG_NOT_FOUND", "Tag not found"),

        Err(UpdateTagError::RepositoryError(msg)) => {
            error!("Failed to update tag {}: {}", tag_id, msg);
            ApiResponse::internal_error()
        }
    }
}
