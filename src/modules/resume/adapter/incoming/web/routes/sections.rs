use actix_web::{delete, post, put, web, Responder};

use crate::modules::resume::adapter::incoming::web::routes::write_error::{
    map_write_error, Resource,
};
use crate::modules::resume::application::ports::outgoing::SectionData;
use crate::shared::api::ApiResponse;
use crate::AppState;

const SECTION: Resource = Resource {
    name: "Section",
    not_found_code: "SECTION_NOT_FOUND",
    parent_not_found_code: "SECTION_NOT_FOUND",
};

#[post("/api/admin/resume/sections")]
pub async fn create_section_handler(
    payload: web::Json<SectionData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.sections.create(payload.into_inner()).await {
        Ok(section) => ApiResponse::created(section),
        Err(err) => map_write_error(&SECTION, err),
    }
}

#[put("/api/admin/resume/sections/{id}")]
pub async fn update_section_handler(
    path: web::Path<i32>,
    payload: web::Json<SectionData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .resume
        .sections
        .update(path.into_inner(), payload.into_inner())
        .await
    {
        Ok(section) => ApiResponse::success(section),
        Err(err) => map_write_error(&SECTION, err),
    }
}

/// Entries and bullets of the section are removed with it.
#[delete("/api/admin/resume/sections/{id}")]
pub async fn delete_section_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.sections.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_write_error(&SECTION, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::modules::resume::application::ports::incoming::use_cases::{
        ManageSectionsUseCase, ResumeWriteError,
    };
    use crate::modules::resume::domain::entities::Section;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Mock ManageSectionsUseCase
     * -------------------------------------------------- */

    #[derive(Clone, Default)]
    struct MockSections {
        error: Option<ResumeWriteError>,
        received: Arc<Mutex<Vec<String>>>,
    }

    impl MockSections {
        fn failing(err: ResumeWriteError) -> Self {
            Self {
                error: Some(err),
                ..Default::default()
            }
        }

        fn outcome<T>(&self, value: T) -> Result<T, ResumeWriteError> {
            match &self.error {
                Some(err) => Err(err.clone()),
                None => Ok(value),
            }
        }
    }

    fn stored(id: i32, data: SectionData) -> Section {
        Section {
            id,
            title: data.title,
            section_type: data.section_type,
            display_order: 0,
            is_visible: data.is_visible,
            entries: vec![],
        }
    }

    #[async_trait]
    impl ManageSectionsUseCase for MockSections {
        async fn create(&self, data: SectionData) -> Result<Section, ResumeWriteError> {
            self.received.lock().unwrap().push("create".to_string());
            self.outcome(stored(10, data))
        }

        async fn update(
            &self,
            section_id: i32,
            data: SectionData,
        ) -> Result<Section, ResumeWriteError> {
            self.received
                .lock()
                .unwrap()
                .push(format!("update {}", section_id));
            self.outcome(stored(section_id, data))
        }

        async fn delete(&self, section_id: i32) -> Result<(), ResumeWriteError> {
            self.received
                .lock()
                .unwrap()
                .push(format!("delete {}", section_id));
            self.outcome(())
        }
    }

    macro_rules! app {
        ($uc:expr) => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().with_manage_sections($uc).build())
                    .service(create_section_handler)
                    .service(update_section_handler)
                    .service(delete_section_handler),
            )
            .await
        };
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_section() {
        let uc = MockSections::default();
        let app = app!(uc.clone());

        let req = test::TestRequest::post()
            .uri("/api/admin/resume/sections")
            .set_json(json!({ "title": "Experience", "section_type": "experience" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], 10);
        assert_eq!(body["data"]["is_visible"], true);
        assert_eq!(*uc.received.lock().unwrap(), vec!["create".to_string()]);
    }

    #[actix_web::test]
    async fn test_create_section_missing_type_is_rejected() {
        let uc = MockSections::default();
        let app = app!(uc.clone());

        let req = test::TestRequest::post()
            .uri("/api/admin/resume/sections")
            .set_json(json!({ "title": "Experience" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(uc.received.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_section_not_found() {
        let app = app!(MockSections::failing(ResumeWriteError::NotFound));

        let req = test::TestRequest::put()
            .uri("/api/admin/resume/sections/4")
            .set_json(json!({ "title": "Skills", "section_type": "skills", "is_visible": false }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SECTION_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_delete_section() {
        let uc = MockSections::default();
        let app = app!(uc.clone());

        let req = test::TestRequest::delete()
            .uri("/api/admin/resume/sections/4")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(*uc.received.lock().unwrap(), vec!["delete 4".to_string()]);
    }
}
