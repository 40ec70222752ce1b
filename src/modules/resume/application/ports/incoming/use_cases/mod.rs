mod get_resume;
mod manage_bullets;
mod manage_entries;
mod manage_sections;
mod resume_write_error;
mod update_basic_info;

pub use get_resume::{GetResumeError, GetResumeUseCase};
pub use manage_bullets::ManageBulletsUseCase;
pub use manage_entries::ManageEntriesUseCase;
pub use manage_sections::ManageSectionsUseCase;
pub use resume_write_error::ResumeWriteError;
pub use update_basic_info::UpdateBasicInfoUseCase;
