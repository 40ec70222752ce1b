use serde::{Deserialize, Serialize};

/// Ordered list whose `display_order` values can be rewritten in bulk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderTarget {
    Sections,
    Entries,
    Bullets,
    Projects,
    TechStack,
    Components,
}

impl ReorderTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReorderTarget::Sections => "sections",
            ReorderTarget::Entries => "entries",
            ReorderTarget::Bullets => "bullets",
            ReorderTarget::Projects => "projects",
            ReorderTarget::TechStack => "tech_stack",
            ReorderTarget::Components => "components",
        }
    }
}
