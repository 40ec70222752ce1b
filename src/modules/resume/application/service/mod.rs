pub mod get_resume_service;
pub mod manage_bullets_service;
pub mod manage_entries_service;
pub mod manage_sections_service;
mod resume_validation;
pub mod update_basic_info_service;

pub use get_resume_service::GetResumeService;
pub use manage_bullets_service::ManageBulletsService;
pub use manage_entries_service::ManageEntriesService;
pub use manage_sections_service::ManageSectionsService;
pub use update_basic_info_service::UpdateBasicInfoService;
