use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::modules::resume::domain::entities::{BasicInfo, Bullet, Entry, Section};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct BasicInfoData {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl BasicInfoData {
    pub fn normalized(self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            email: trimmed(self.email),
            phone: trimmed(self.phone),
            linkedin_url: trimmed(self.linkedin_url),
            github_url: trimmed(self.github_url),
            website_url: trimmed(self.website_url),
            location: trimmed(self.location),
            summary: trimmed(self.summary),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct SectionData {
    pub title: String,
    pub section_type: String,
    #[serde(default = "visible_by_default")]
    pub is_visible: bool,
}

impl SectionData {
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            section_type: self.section_type.trim().to_string(),
            ..self
        }
    }
}

fn visible_by_default() -> bool {
    true
}

/// Entry fields. Dates accept `null`, `""` or `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct EntryData {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl EntryData {
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            subtitle: trimmed(self.subtitle),
            location: trimmed(self.location),
            description: trimmed(self.description),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct BulletData {
    pub content: String,
}

impl BulletData {
    pub fn normalized(self) -> Self {
        Self {
            content: self.content.trim().to_string(),
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Parent record not found")]
    ParentNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Writes for the resume tree. New rows go to the end of their parent
/// (`display_order = max + 1`); deletes cascade to children.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Updates the single basic-info row, creating it on first use.
    async fn save_basic_info(
        &self,
        data: BasicInfoData,
    ) -> Result<BasicInfo, ResumeRepositoryError>;

    async fn create_section(&self, data: SectionData) -> Result<Section, ResumeRepositoryError>;

    async fn update_section(
        &self,
        section_id: i32,
        data: SectionData,
    ) -> Result<Section, ResumeRepositoryError>;

    async fn delete_section(&self, section_id: i32) -> Result<(), ResumeRepositoryError>;

    async fn create_entry(
        &self,
        section_id: i32,
        data: EntryData,
    ) -> Result<Entry, ResumeRepositoryError>;

    async fn update_entry(
        &self,
        entry_id: i32,
        data: EntryData,
    ) -> Result<Entry, ResumeRepositoryError>;

    async fn delete_entry(&self, entry_id: i32) -> Result<(), ResumeRepositoryError>;

    async fn create_bullet(
        &self,
        entry_id: i32,
        data: BulletData,
    ) -> Result<Bullet, ResumeRepositoryError>;

    async fn update_bullet(
        &self,
        bullet_id: i32,
        data: BulletData,
    ) -> Result<Bullet, ResumeRepositoryError>;

    async fn delete_bullet(&self, bullet_id: i32) -> Result<(), ResumeRepositoryError>;
}
