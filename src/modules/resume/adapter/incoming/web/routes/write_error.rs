use actix_web::HttpResponse;
use tracing::error;

use crate::modules::resume::application::ports::incoming::use_cases::ResumeWriteError;
use crate::shared::api::ApiResponse;

/// Error codes for one resume resource and the parent it hangs off.
pub(super) struct Resource {
    pub name: &'static str,
    pub not_found_code: &'static str,
    pub parent_not_found_code: &'static str,
}

pub(super) fn map_write_error(resource: &Resource, err: ResumeWriteError) -> HttpResponse {
    match err {
        ResumeWriteError::Validation(msg) => ApiResponse::validation_error(&msg),

        ResumeWriteError::NotFound => ApiResponse::not_found(
            resource.not_found_code,
            &format!("{} not found", resource.name),
        ),

        ResumeWriteError::ParentNotFound => ApiResponse::not_found(
            resource.parent_not_found_code,
            "Parent record not found",
        ),

        ResumeWriteError::RepositoryError(msg) => {
            error!("Failed to write resume {}: {}", resource.name, msg);
            ApiResponse::internal_error()
        }
    }
}
