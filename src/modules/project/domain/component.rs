// src/modules/project/domain/component.rs

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Component kinds (closed set)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Title,
    About,
    TechStack,
    ImageCarousel,
    Text,
    TextWithTitle,
    Video,
    TextWithImage,
    TextImageTitle,
    SingleImage,
    RepositoryLinks,
    RelatedProjects,
    Mermaid,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 13] = [
        ComponentKind::Title,
        ComponentKind::About,
        ComponentKind::TechStack,
        ComponentKind::ImageCarousel,
        ComponentKind::Text,
        ComponentKind::TextWithTitle,
        ComponentKind::Video,
        ComponentKind::TextWithImage,
        ComponentKind::TextImageTitle,
        ComponentKind::SingleImage,
        ComponentKind::RepositoryLinks,
        ComponentKind::RelatedProjects,
        ComponentKind::Mermaid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Title => "title",
            ComponentKind::About => "about",
            ComponentKind::TechStack => "tech_stack",
            ComponentKind::ImageCarousel => "image_carousel",
            ComponentKind::Text => "text",
            ComponentKind::TextWithTitle => "text_with_title",
            ComponentKind::Video => "video",
            ComponentKind::TextWithImage => "text_with_image",
            ComponentKind::TextImageTitle => "text_image_title",
            ComponentKind::SingleImage => "single_image",
            ComponentKind::RepositoryLinks => "repository_links",
            ComponentKind::RelatedProjects => "related_projects",
            ComponentKind::Mermaid => "mermaid",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown component type: {0}")]
pub struct UnknownComponentType(pub String);

impl FromStr for ComponentKind {
    type Err = UnknownComponentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownComponentType(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Per-kind payloads
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleData {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Shared by `about` and `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProseData {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextWithTitleData {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

/// Shared by `text_with_image` and `text_image_title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextWithImageData {
    pub text: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_position: Option<ImagePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleImageData {
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarouselImage {
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCarouselData {
    #[serde(default)]
    pub images: Vec<CarouselImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoData {
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryLinksData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedProjectsData {
    pub project_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MermaidData {
    pub diagram_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Tagged union
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum ComponentData {
    Title(TitleData),
    About(ProseData),
    TechStack,
    ImageCarousel(ImageCarouselData),
    Text(ProseData),
    TextWithTitle(TextWithTitleData),
    Video(VideoData),
    TextWithImage(TextWithImageData),
    TextImageTitle(TextWithImageData),
    SingleImage(SingleImageData),
    RepositoryLinks(RepositoryLinksData),
    RelatedProjects(RelatedProjectsData),
    Mermaid(MermaidData),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComponentDataError {
    #[error("component_data is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("invalid {kind} data: {message}")]
    InvalidShape {
        kind: ComponentKind,
        message: String,
    },
}

impl ComponentData {
    /// Interprets stored data for `kind`. The payload may be an object or a
    /// JSON-encoded string holding one; `null` counts as an empty object.
    pub fn parse(kind: ComponentKind, raw: &Value) -> Result<Self, ComponentDataError> {
        let value = normalize(raw)?;

        let data = match kind {
            ComponentKind::Title => ComponentData::Title(decode(kind, &value)?),
            ComponentKind::About => ComponentData::About(decode(kind, &value)?),
            ComponentKind::TechStack => ComponentData::TechStack,
            ComponentKind::ImageCarousel => ComponentData::ImageCarousel(decode(kind, &value)?),
            ComponentKind::Text => ComponentData::Text(decode(kind, &value)?),
            ComponentKind::TextWithTitle => ComponentData::TextWithTitle(decode(kind, &value)?),
            ComponentKind::Video => ComponentData::Video(decode(kind, &value)?),
            ComponentKind::TextWithImage => ComponentData::TextWithImage(decode(kind, &value)?),
            ComponentKind::TextImageTitle => ComponentData::TextImageTitle(decode(kind, &value)?),
            ComponentKind::SingleImage => ComponentData::SingleImage(decode(kind, &value)?),
            ComponentKind::RepositoryLinks => {
                ComponentData::RepositoryLinks(decode(kind, &value)?)
            }
            ComponentKind::RelatedProjects => {
                ComponentData::RelatedProjects(decode(kind, &value)?)
            }
            ComponentKind::Mermaid => ComponentData::Mermaid(decode(kind, &value)?),
        };

        Ok(data)
    }

    /// Checks `raw` against `kind` and returns it as a JSON object ready to
    /// store. Fields the kind does not read are kept as sent.
    pub fn validated_payload(kind: ComponentKind, raw: &Value) -> Result<Value, ComponentDataError> {
        Self::parse(kind, raw)?;
        normalize(raw).map(Cow::into_owned)
    }
}

fn normalize(raw: &Value) -> Result<Cow<'_, Value>, ComponentDataError> {
    match raw {
        Value::String(text) => serde_json::from_str::<Value>(text)
            .map(Cow::Owned)
            .map_err(|e| ComponentDataError::InvalidJson(e.to_string())),
        Value::Null => Ok(Cow::Owned(Value::Object(Default::default()))),
        other => Ok(Cow::Borrowed(other)),
    }
}

fn decode<T: DeserializeOwned>(kind: ComponentKind, value: &Value) -> Result<T, ComponentDataError> {
    T::deserialize(value).map_err(|e| ComponentDataError::InvalidShape {
        kind,
        message: e.to_string(),
    })
}
