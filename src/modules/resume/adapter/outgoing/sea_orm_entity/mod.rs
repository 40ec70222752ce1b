pub mod resume_basic_info;
pub mod resume_entries;
pub mod resume_entry_bullets;
pub mod resume_sections;
