use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::reorder::application::ports::incoming::use_cases::{
    ReorderCommand, ReorderError,
};
use crate::modules::reorder::domain::ReorderTarget;
use crate::shared::api::ApiResponse;
use crate::shared::display_order::ReorderItem;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    #[serde(rename = "type")]
    pub target: ReorderTarget,
    pub items: Vec<ReorderItem>,
}

#[derive(Debug, Serialize)]
pub struct ReorderResponse {
    #[serde(rename = "type")]
    pub target: ReorderTarget,
    pub updated: usize,
}

#[put("/api/admin/reorder")]
pub async fn reorder_handler(
    payload: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ReorderRequest { target, items } = payload.into_inner();

    match data.reorder.execute(ReorderCommand::new(target, items)).await {
        Ok(updated) => ApiResponse::success(ReorderResponse { target, updated }),
        Err(ReorderError::Validation(msg)) => ApiResponse::validation_error(&msg),
        Err(ReorderError::NotFound(id)) => ApiResponse::not_found(
            "RECORD_NOT_FOUND",
            &format!("No {} row with id {}", target.as_str(), id),
        ),
        Err(ReorderError::Conflict(msg)) => ApiResponse::conflict("DISPLAY_ORDER_CONFLICT", &msg),
        Err(e @ ReorderError::RepositoryError(_)) => {
            error!(list = target.as_str(), "Reorder failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
