use chrono::NaiveDate;
use serde_json::Value;

use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectResult,
};
use crate::modules::project::domain::entities::{
    Project, ProjectComponent, ProjectDetail, Tag, TechStackItem,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_project(id: i32, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        subheading: None,
        date_started: date(2023, 1, 1),
        date_ended: None,
        is_pinned: false,
        poster_image_url: None,
        display_order: id,
        tags: vec![],
        tech_stack: vec![],
    }
}

pub fn sample_tag(id: i32, name: &str) -> Tag {
    Tag {
        id,
        name: name.to_string(),
        color: None,
    }
}

pub fn sample_tech(link_id: i32, name: &str, display_order: i32) -> TechStackItem {
    TechStackItem {
        link_id,
        tech_id: link_id * 10,
        name: name.to_string(),
        color: None,
        image_url: None,
        display_order,
    }
}

pub fn sample_component(id: i32, kind: &str, data: Value, display_order: i32) -> ProjectComponent {
    ProjectComponent {
        id,
        project_id: 1,
        component_type: kind.to_string(),
        component_data: data,
        display_order,
    }
}

pub fn sample_detail(components: Vec<ProjectComponent>) -> ProjectDetail {
    ProjectDetail {
        project: sample_project(1, "Chess AI"),
        color: None,
        components,
        related_projects: vec![],
    }
}

pub fn sample_project_data(name: &str) -> ProjectData {
    ProjectData {
        name: name.to_string(),
        subheading: Some("Minimax in Rust".to_string()),
        date_started: date(2023, 1, 1),
        date_ended: None,
        is_pinned: false,
        poster_image_url: None,
        color: None,
    }
}

pub fn sample_project_result(id: i32, name: &str) -> ProjectResult {
    ProjectResult {
        id,
        name: name.to_string(),
        subheading: Some("Minimax in Rust".to_string()),
        date_started: date(2023, 1, 1),
        date_ended: None,
        is_pinned: false,
        poster_image_url: None,
        color: None,
        display_order: 0,
    }
}
