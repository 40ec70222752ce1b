use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BasicInfo {
    pub id: i32,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bullet {
    pub id: i32,
    pub entry_id: i32,
    pub content: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Entry {
    pub id: i32,
    pub section_id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
    pub display_order: i32,
    #[serde(default)]
    pub bullets: Vec<Bullet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Section {
    pub id: i32,
    pub title: String,
    pub section_type: String,
    pub display_order: i32,
    pub is_visible: bool,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Public resume tree. Only visible sections; every level in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Resume {
    pub basic_info: Option<BasicInfo>,
    pub sections: Vec<Section>,
}

/// Flat rows as stored, before nesting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeRows {
    pub basic_info: Option<BasicInfo>,
    pub sections: Vec<Section>,
    pub entries: Vec<Entry>,
    pub bullets: Vec<Bullet>,
}
