mod bullets;
mod entries;
mod get_resume;
mod sections;
mod update_basic_info;
mod write_error;

pub use bullets::{create_bullet_handler, delete_bullet_handler, update_bullet_handler};
pub use entries::{create_entry_handler, delete_entry_handler, update_entry_handler};
pub use get_resume::get_resume_handler;
pub use sections::{create_section_handler, delete_section_handler, update_section_handler};
pub use update_basic_info::update_basic_info_handler;

// utoipa path structs for the OpenAPI document
pub use get_resume::__path_get_resume_handler;
