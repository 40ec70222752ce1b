pub mod resume_query;
pub mod resume_repository;

pub use resume_query::{ResumeQuery, ResumeQueryError};
pub use resume_repository::{
    BasicInfoData, BulletData, EntryData, ResumeRepository, ResumeRepositoryError, SectionData,
};
