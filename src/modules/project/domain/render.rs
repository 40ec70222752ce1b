// src/modules/project/domain/render.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::modules::project::domain::component::{
    CarouselImage, ComponentData, ComponentKind, ImagePosition, MediaType, TextWithImageData,
    TitleData,
};
use crate::modules::project::domain::entities::{
    ProjectComponent, ProjectDetail, RelatedProject, TechStackItem,
};

//
// ──────────────────────────────────────────────────────────
// Render output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MediaBlock {
    pub url: String,
    pub media_type: MediaType,
    /// Videos start playing when scrolled into view and pause when they leave.
    pub autoplay_in_view: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Github,
    Live,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RepositoryLink {
    pub kind: LinkKind,
    pub url: String,
}

/// Description of one body block of a project page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum RenderedBlock {
    About {
        text: String,
        color: String,
    },
    Text {
        text: String,
        color: String,
    },
    TextWithTitle {
        title: String,
        text: String,
        color: String,
    },
    TextWithImage {
        title: Option<String>,
        text: String,
        media: MediaBlock,
        caption: Option<String>,
        image_position: ImagePosition,
        color: String,
    },
    SingleImage {
        image_url: String,
        caption: Option<String>,
    },
    ImageCarousel {
        images: Vec<CarouselImage>,
        color: String,
    },
    Video {
        video_id: String,
        embed_url: String,
        caption: Option<String>,
    },
    TechStack {
        items: Vec<TechStackItem>,
    },
    RepositoryLinks {
        links: Vec<RepositoryLink>,
        color: String,
    },
    RelatedProjects {
        projects: Vec<RelatedProject>,
    },
    Mermaid {
        diagram_type: String,
        diagram_code: String,
        title: Option<String>,
        caption: Option<String>,
    },
    /// Inline placeholder for a component that could not be rendered.
    Error {
        component_id: i32,
        component_type: String,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PageHeader {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RenderedPage {
    pub header: PageHeader,
    pub blocks: Vec<RenderedBlock>,
}

//
// ──────────────────────────────────────────────────────────
// Dispatch
// ──────────────────────────────────────────────────────────
//

/// Turns one stored component into a block, using the owning project for
/// shared context (colour, tech stack, resolved related projects).
///
/// Returns `None` for `title` (shown in the page header), for kinds this
/// build does not know, and for an empty carousel. Bad data yields an
/// [`RenderedBlock::Error`] for this component only.
pub fn render_component(
    component: &ProjectComponent,
    project: &ProjectDetail,
) -> Option<RenderedBlock> {
    let kind = match component.component_type.parse::<ComponentKind>() {
        Ok(kind) => kind,
        Err(e) => {
            warn!(
                component_id = component.id,
                project_id = component.project_id,
                "{}, skipping",
                e
            );
            return None;
        }
    };

    if kind == ComponentKind::Title {
        return None;
    }

    match ComponentData::parse(kind, &component.component_data) {
        Ok(data) => render_data(component, data, project),
        Err(e) => {
            warn!(
                component_id = component.id,
                project_id = component.project_id,
                "Malformed component data: {}",
                e
            );
            Some(error_block(component, e.to_string()))
        }
    }
}

fn render_data(
    component: &ProjectComponent,
    data: ComponentData,
    project: &ProjectDetail,
) -> Option<RenderedBlock> {
    let color = project.color().to_string();

    match data {
        ComponentData::Title(_) => None,

        ComponentData::About(d) => Some(RenderedBlock::About {
            text: d.text,
            color,
        }),

        ComponentData::Text(d) => Some(RenderedBlock::Text {
            text: d.text,
            color,
        }),

        ComponentData::TextWithTitle(d) => Some(RenderedBlock::TextWithTitle {
            title: d.title,
            text: d.text,
            color,
        }),

        ComponentData::TextWithImage(d) | ComponentData::TextImageTitle(d) => {
            Some(text_with_image(d, color))
        }

        ComponentData::SingleImage(d) => Some(RenderedBlock::SingleImage {
            image_url: d.image_url,
            caption: d.caption,
        }),

        ComponentData::ImageCarousel(d) => {
            if d.images.is_empty() {
                None
            } else {
                Some(RenderedBlock::ImageCarousel {
                    images: d.images,
                    color,
                })
            }
        }

        ComponentData::Video(d) => match youtube_video_id(&d.video_url) {
            Some(video_id) => Some(RenderedBlock::Video {
                embed_url: format!("https://www.youtube.com/embed/{}", video_id),
                video_id,
                caption: d.caption,
            }),
            None => Some(error_block(
                component,
                format!("Invalid video URL: {}", d.video_url),
            )),
        },

        ComponentData::TechStack => Some(RenderedBlock::TechStack {
            items: project.tech_stack_in_order(),
        }),

        ComponentData::RepositoryLinks(d) => {
            let links = [(LinkKind::Github, d.github_url), (LinkKind::Live, d.live_url)]
                .into_iter()
                .filter_map(|(kind, url)| {
                    url.filter(|u| !u.trim().is_empty())
                        .map(|url| RepositoryLink { kind, url })
                })
                .collect();

            Some(RenderedBlock::RepositoryLinks { links, color })
        }

        ComponentData::RelatedProjects(d) => {
            let projects = d
                .project_ids
                .iter()
                .filter_map(|id| {
                    let found = project.related_projects.iter().find(|p| p.id == *id);
                    if found.is_none() {
                        debug!(
                            component_id = component.id,
                            related_id = id,
                            "Related project not resolved, skipping"
                        );
                    }
                    found.cloned()
                })
                .collect();

            Some(RenderedBlock::RelatedProjects { projects })
        }

        ComponentData::Mermaid(d) => match diagram_type(&d.diagram_code) {
            Ok(diagram_type) => Some(RenderedBlock::Mermaid {
                diagram_type: diagram_type.to_string(),
                diagram_code: d.diagram_code,
                title: d.title,
                caption: d.caption,
            }),
            Err(message) => Some(error_block(component, message)),
        },
    }
}

fn text_with_image(d: TextWithImageData, color: String) -> RenderedBlock {
    let media_type = d.media_type.unwrap_or_default();

    RenderedBlock::TextWithImage {
        title: d.title,
        text: d.text,
        media: MediaBlock {
            url: d.image_url,
            media_type,
            autoplay_in_view: media_type == MediaType::Video,
        },
        caption: d.caption,
        image_position: d.image_position.unwrap_or_default(),
        color,
    }
}

fn error_block(component: &ProjectComponent, message: String) -> RenderedBlock {
    RenderedBlock::Error {
        component_id: component.id,
        component_type: component.component_type.clone(),
        message,
    }
}

//
// ──────────────────────────────────────────────────────────
// Page assembly
// ──────────────────────────────────────────────────────────
//

/// Header text: the first `title` component wins, falling back to the
/// project's own name and subheading for anything it leaves empty.
pub fn page_header(project: &ProjectDetail) -> PageHeader {
    let title_data = project
        .sorted_components()
        .into_iter()
        .find(|c| c.component_type == ComponentKind::Title.as_str())
        .and_then(
            |c| match ComponentData::parse(ComponentKind::Title, &c.component_data) {
                Ok(ComponentData::Title(data)) => Some(data),
                _ => None,
            },
        );

    let TitleData { title, subtitle } = title_data.unwrap_or(TitleData {
        title: String::new(),
        subtitle: None,
    });

    PageHeader {
        title: non_empty(Some(title)).unwrap_or_else(|| project.project.name.clone()),
        subtitle: non_empty(subtitle).or_else(|| non_empty(project.project.subheading.clone())),
    }
}

/// Renders every component in display order. Each component is rendered on
/// its own, so one failure never hides its siblings.
pub fn render_page(project: &ProjectDetail) -> RenderedPage {
    let blocks = project
        .sorted_components()
        .into_iter()
        .filter_map(|component| render_component(component, project))
        .collect();

    RenderedPage {
        header: page_header(project),
        blocks,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Media helpers
// ──────────────────────────────────────────────────────────
//

static YOUTUBE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
            .expect("youtube watch pattern"),
        Regex::new(r"youtube\.com/shorts/([^&\n?#]+)").expect("youtube shorts pattern"),
    ]
});

pub fn youtube_video_id(url: &str) -> Option<String> {
    YOUTUBE_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

const DIAGRAM_TYPES: &[&str] = &[
    "graph",
    "flowchart",
    "sequenceDiagram",
    "classDiagram",
    "classDiagram-v2",
    "stateDiagram",
    "stateDiagram-v2",
    "erDiagram",
    "journey",
    "gantt",
    "pie",
    "quadrantChart",
    "requirementDiagram",
    "gitGraph",
    "mindmap",
    "timeline",
    "sankey-beta",
    "xychart-beta",
    "block-beta",
    "packet-beta",
    "architecture-beta",
    "kanban",
    "C4Context",
    "C4Container",
    "C4Component",
    "C4Dynamic",
    "C4Deployment",
];

/// Finds the declared diagram type, skipping front matter, `%%` comments and
/// blank lines.
pub fn diagram_type(code: &str) -> Result<&'static str, String> {
    let mut in_front_matter = false;

    for line in code.lines().map(str::trim) {
        if line == "---" {
            in_front_matter = !in_front_matter;
            continue;
        }
        if in_front_matter || line.is_empty() || line.starts_with("%%") {
            continue;
        }

        let keyword = line
            .split(|c: char| c.is_whitespace() || c == ';')
            .next()
            .unwrap_or_default();

        return DIAGRAM_TYPES
            .iter()
            .copied()
            .find(|t| *t == keyword)
            .ok_or_else(|| format!("Unrecognized diagram type: {}", keyword));
    }

    Err("Diagram code is empty".to_string())
}
