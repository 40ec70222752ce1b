use actix_web::{delete, post, put, web, Responder};
use serde::Deserialize;

use crate::modules::resume::adapter::incoming::web::routes::write_error::{
    map_write_error, Resource,
};
use crate::modules::resume::application::ports::outgoing::EntryData;
use crate::shared::api::ApiResponse;
use crate::AppState;

const ENTRY: Resource = Resource {
    name: "Entry",
    not_found_code: "ENTRY_NOT_FOUND",
    parent_not_found_code: "SECTION_NOT_FOUND",
};

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub section_id: i32,
    #[serde(flatten)]
    pub data: EntryData,
}

#[post("/api/admin/resume/entries")]
pub async fn create_entry_handler(
    payload: web::Json<CreateEntryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let CreateEntryRequest {
        section_id,
        data: entry,
    } = payload.into_inner();

    match data.resume.entries.create(section_id, entry).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => map_write_error(&ENTRY, err),
    }
}

#[put("/api/admin/resume/entries/{id}")]
pub async fn update_entry_handler(
    path: web::Path<i32>,
    payload: web::Json<EntryData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .resume
        .entries
        .update(path.into_inner(), payload.into_inner())
        .await
    {
        Ok(entry) => ApiResponse::success(entry),
        Err(err) => map_write_error(&ENTRY, err),
    }
}

#[delete("/api/admin/resume/entries/{id}")]
pub async fn delete_entry_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.entries.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_write_error(&ENTRY, err),
    }
}
