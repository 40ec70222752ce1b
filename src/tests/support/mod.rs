pub mod app_state_builder;
pub mod project_test_fixtures;
pub mod resume_repository_mock;
pub mod stubs;
