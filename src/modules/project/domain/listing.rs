// src/modules/project/domain/listing.rs

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::project::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// Options
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SortOption {
    /// Pinned projects first, then most recently started.
    #[default]
    #[serde(rename = "date-newest")]
    DateNewest,
    #[serde(rename = "date-oldest")]
    DateOldest,
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort option: {0}")]
pub struct UnknownSortOption(pub String);

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-newest" => Ok(SortOption::DateNewest),
            "date-oldest" => Ok(SortOption::DateOldest),
            "name-asc" => Ok(SortOption::NameAsc),
            "name-desc" => Ok(SortOption::NameDesc),
            other => Err(UnknownSortOption(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PinnedFilter {
    #[default]
    All,
    #[serde(alias = "true")]
    Pinned,
    #[serde(alias = "false")]
    Unpinned,
}

impl PinnedFilter {
    fn accepts(self, project: &Project) -> bool {
        match self {
            PinnedFilter::All => true,
            PinnedFilter::Pinned => project.is_pinned,
            PinnedFilter::Unpinned => !project.is_pinned,
        }
    }
}

impl fmt::Display for PinnedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PinnedFilter::All => "all",
            PinnedFilter::Pinned => "pinned",
            PinnedFilter::Unpinned => "unpinned",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    /// Case-insensitive substring over name, tag names and tech names.
    pub query: Option<String>,
    /// Exact tag name, compared case-insensitively.
    pub tag: Option<String>,
    pub pinned: PinnedFilter,
}

//
// ──────────────────────────────────────────────────────────
// Filter
// ──────────────────────────────────────────────────────────
//

/// Keeps the projects matching every supplied criterion, preserving input
/// order. Blank criteria are ignored.
pub fn filter_projects(projects: Vec<Project>, filter: &ProjectListFilter) -> Vec<Project> {
    let query = normalized(filter.query.as_deref());
    let tag = normalized(filter.tag.as_deref());

    projects
        .into_iter()
        .filter(|p| filter.pinned.accepts(p))
        .filter(|p| match &tag {
            Some(tag) => p.tags.iter().any(|t| t.name.to_lowercase() == *tag),
            None => true,
        })
        .filter(|p| match &query {
            Some(q) => matches_query(p, q),
            None => true,
        })
        .collect()
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

fn matches_query(project: &Project, query: &str) -> bool {
    project.name.to_lowercase().contains(query)
        || project
            .tags
            .iter()
            .any(|t| t.name.to_lowercase().contains(query))
        || project
            .tech_stack
            .iter()
            .any(|t| t.name.to_lowercase().contains(query))
}

//
// ──────────────────────────────────────────────────────────
// Sort
// ──────────────────────────────────────────────────────────
//

/// Stable, so sorting an already sorted list changes nothing.
pub fn sort_projects(mut projects: Vec<Project>, option: SortOption) -> Vec<Project> {
    projects.sort_by(|a, b| compare(a, b, option));
    projects
}

fn compare(a: &Project, b: &Project, option: SortOption) -> Ordering {
    match option {
        SortOption::DateNewest => b
            .is_pinned
            .cmp(&a.is_pinned)
            .then_with(|| b.date_started.cmp(&a.date_started)),
        SortOption::DateOldest => a.date_started.cmp(&b.date_started),
        SortOption::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortOption::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
    }
}
