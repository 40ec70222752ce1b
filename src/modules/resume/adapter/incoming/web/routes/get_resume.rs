use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::resume::application::ports::incoming::use_cases::GetResumeError;
use crate::modules::resume::domain::entities::Resume;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the resume
///
/// Basic info plus visible sections, each level sorted by display order.
#[utoipa::path(
    get,
    path = "/api/resume",
    tag = "resume",
    responses(
        (status = 200, description = "Resume", body = inline(SuccessResponse<Resume>)),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[get("/api/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resume.get.execute().await {
        Ok(resume) => ApiResponse::success(resume),

        Err(GetResumeError::QueryFailed(msg)) => {
            error!("Failed to load resume: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::resume::application::ports::incoming::use_cases::GetResumeUseCase;
    use crate::modules::resume::domain::entities::Section;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockGetResumeUseCase {
        result: Result<Resume, GetResumeError>,
    }

    #[async_trait]
    impl GetResumeUseCase for MockGetResumeUseCase {
        async fn execute(&self) -> Result<Resume, GetResumeError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_get_resume_success() {
        let resume = Resume {
            basic_info: None,
            sections: vec![Section {
                id: 1,
                title: "Skills".to_string(),
                section_type: "skills".to_string(),
                display_order: 0,
                is_visible: true,
                entries: vec![],
            }],
        };

        let app_state = TestAppStateBuilder::default()
            .with_get_resume(MockGetResumeUseCase { result: Ok(resume) })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_resume_handler)).await;

        let req = test::TestRequest::get().uri("/api/resume").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["basic_info"], Value::Null);
        assert_eq!(body["data"]["sections"][0]["title"], "Skills");
    }

    #[actix_web::test]
    async fn test_get_resume_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_resume(MockGetResumeUseCase {
                result: Err(GetResumeError::QueryFailed("down".to_string())),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_resume_handler)).await;

        let req = test::TestRequest::get().uri("/api/resume").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
