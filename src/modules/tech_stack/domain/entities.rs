use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const MAX_NAME_LENGTH: usize = 100;

/// Shared master record. Projects point at it through link rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TechStackMaster {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TechUsageProject {
    pub id: i32,
    pub name: String,
}

/// Which projects link a master record, shown before editing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TechUsage {
    pub tech_id: i32,
    pub count: usize,
    pub projects: Vec<TechUsageProject>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TechStackFieldsError {
    #[error("Tech stack name cannot be empty")]
    EmptyName,

    #[error("Tech stack name must not exceed 100 characters")]
    NameTooLong,
}

/// Validated editable fields of a master record.
#[derive(Debug, Clone, PartialEq)]
pub struct TechStackFields {
    name: String,
    color: Option<String>,
    image_url: Option<String>,
}

impl TechStackFields {
    pub fn new(
        name: String,
        color: Option<String>,
        image_url: Option<String>,
    ) -> Result<Self, TechStackFieldsError> {
        let name = name.trim().to_string();

        if name.is_empty() {
            return Err(TechStackFieldsError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(TechStackFieldsError::NameTooLong);
        }

        Ok(Self {
            name,
            color: non_blank(color),
            image_url: non_blank(image_url),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Option<&String> {
        self.color.as_ref()
    }

    pub fn image_url(&self) -> Option<&String> {
        self.image_url.as_ref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
