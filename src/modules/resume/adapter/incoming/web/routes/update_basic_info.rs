use actix_web::{put, web, Responder};

use crate::modules::resume::adapter::incoming::web::routes::write_error::{
    map_write_error, Resource,
};
use crate::modules::resume::application::ports::outgoing::BasicInfoData;
use crate::shared::api::ApiResponse;
use crate::AppState;

const BASIC_INFO: Resource = Resource {
    name: "Basic info",
    not_found_code: "BASIC_INFO_NOT_FOUND",
    parent_not_found_code: "BASIC_INFO_NOT_FOUND",
};

#[put("/api/admin/resume/basic-info")]
pub async fn update_basic_info_handler(
    payload: web::Json<BasicInfoData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.update_basic_info.execute(payload.into_inner()).await {
        Ok(saved) => ApiResponse::success(saved),
        Err(err) => map_write_error(&BASIC_INFO, err),
    }
}
