use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Colour used for prose and accents when a project has none of its own.
pub const DEFAULT_PROJECT_COLOR: &str = "#02a6ff";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// One project's view of a master tech record.
///
/// `tech_id` points at the shared master row; `name`, `color` and
/// `image_url` are read through that reference, so editing the master
/// changes every project linking to it. `display_order` belongs to the link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TechStackItem {
    #[serde(default)]
    pub link_id: i32,
    #[serde(default)]
    pub tech_id: i32,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub subheading: Option<String>,
    pub date_started: NaiveDate,
    #[serde(default)]
    pub date_ended: Option<NaiveDate>,
    pub is_pinned: bool,
    #[serde(default)]
    pub poster_image_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub tech_stack: Vec<TechStackItem>,
}

/// A stored component row. `component_type` stays a plain string here: the
/// store may hold kinds this build does not know, and those must be skipped
/// at render time rather than failing the whole project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectComponent {
    pub id: i32,
    pub project_id: i32,
    pub component_type: String,
    #[schema(value_type = Object)]
    #[serde(default)]
    pub component_data: serde_json::Value,
    pub display_order: i32,
}

/// Minimal data needed to link to another project from a `related_projects`
/// block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RelatedProject {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub poster_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub components: Vec<ProjectComponent>,
    /// Projects referenced by `related_projects` components, resolved by the
    /// caller before rendering.
    #[serde(default)]
    pub related_projects: Vec<RelatedProject>,
}

impl ProjectDetail {
    pub fn color(&self) -> &str {
        self.color
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_PROJECT_COLOR)
    }

    /// Components in `display_order`. Storage order is not trusted; the sort
    /// is stable so duplicate orders keep their input order.
    pub fn sorted_components(&self) -> Vec<&ProjectComponent> {
        let mut components: Vec<&ProjectComponent> = self.components.iter().collect();
        components.sort_by_key(|c| c.display_order);
        components
    }

    pub fn tech_stack_in_order(&self) -> Vec<TechStackItem> {
        let mut items = self.project.tech_stack.clone();
        items.sort_by_key(|t| t.display_order);
        items
    }
}
