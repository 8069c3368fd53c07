//! Block content model
//!
//! One content shape per block type family, composed into the
//! [`BlockContent`] tagged union. Content is only ever replaced
//! wholesale; field-level edits clone, change, and swap the value.
//!
//! Submodules:
//! - `normalize`: best-effort coercion of generated input
//! - `validate`: schema constraint checking

pub mod normalize;
pub mod validate;

use crate::types::{BlockType, CodeLanguage};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// SHAPE ENUMS
// ============================================================================

/// How a video block got its media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    /// Uploaded through the upload collaborator.
    Upload,
    /// Pasted embed link.
    #[default]
    Embed,
}

impl VideoSource {
    /// Persisted codes, used by the schema registry.
    pub const CODES: &'static [&'static str] = &["upload", "embed"];

    pub fn code(&self) -> &'static str {
        match self {
            VideoSource::Upload => "upload",
            VideoSource::Embed => "embed",
        }
    }
}

/// Where video playback resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    #[default]
    Youtube,
    Vimeo,
    S3,
}

impl VideoProvider {
    pub const CODES: &'static [&'static str] = &["youtube", "vimeo", "s3"];

    pub fn code(&self) -> &'static str {
        match self {
            VideoProvider::Youtube => "youtube",
            VideoProvider::Vimeo => "vimeo",
            VideoProvider::S3 => "s3",
        }
    }
}

/// Visual style of a list block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    #[default]
    Bullet,
    Numbered,
    Checkbox,
}

impl ListStyle {
    pub const CODES: &'static [&'static str] = &["bullet", "numbered", "checkbox"];

    pub fn code(&self) -> &'static str {
        match self {
            ListStyle::Bullet => "bullet",
            ListStyle::Numbered => "numbered",
            ListStyle::Checkbox => "checkbox",
        }
    }

    /// Parse a persisted code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "bullet" | "bulleted" | "unordered" => Some(ListStyle::Bullet),
            "numbered" | "ordered" | "number" => Some(ListStyle::Numbered),
            "checkbox" | "checklist" | "check" => Some(ListStyle::Checkbox),
            _ => None,
        }
    }
}

// ============================================================================
// CONTENT SHAPES
// ============================================================================

/// Text block: stored rich markup, treated as an opaque string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TextContent {
    pub text: String,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Video block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoContent {
    pub video_source: VideoSource,
    pub video_provider: VideoProvider,
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Image block. `alt_text` is accessibility-critical and capped at 125
/// characters everywhere, including generated input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageContent {
    pub image_url: String,
    pub alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Code block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeContent {
    pub code: String,
    pub language: CodeLanguage,
}

/// One entry of a list block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ListItem {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: None,
        }
    }
}

/// List block: 1..=100 ordered items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ListContent {
    pub list_type: ListStyle,
    pub items: Vec<ListItem>,
}

/// One selectable poll option. `votes` is always persisted as zero; live
/// tallies belong to the response collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PollOption {
    pub id: String,
    pub text: String,
    pub votes: u32,
}

impl PollOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            votes: 0,
        }
    }
}

/// Poll block: question plus 2..=10 options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PollContent {
    pub question: String,
    pub options: Vec<PollOption>,
    pub allow_multiple: bool,
    pub show_results: bool,
}

/// One weighted word of a word cloud. `value` is clamped to 1..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WordEntry {
    pub text: String,
    pub value: u8,
}

impl WordEntry {
    pub fn new(text: impl Into<String>, value: u8) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// Word cloud block. `mappings` associates a word with a concept string
/// for follow-up discussion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WordCloudContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub words: Vec<WordEntry>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub mappings: IndexMap<String, String>,
}

/// One alternative in a choice comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Choice {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Choice {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }
}

/// Choice comparison block: question plus 2..=6 labeled choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceComparisonContent {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub choices: Vec<Choice>,
}

/// Shared shape of the generic interactive pedagogical types
/// (reflection, brainstorm, case study, ...). Every field is optional;
/// `config` is a deliberately untyped extension map threaded through as
/// opaque data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractiveContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub config: IndexMap<String, Value>,
}

// ============================================================================
// TAGGED UNION
// ============================================================================

/// Content of a block, tagged by shape family.
///
/// The 22 generic interactive types all carry [`InteractiveContent`];
/// the block's [`BlockType`] tag distinguishes them. `Unknown` preserves
/// the stored value of an unregistered type verbatim so a later writer
/// can still read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BlockContent {
    Text(TextContent),
    Video(VideoContent),
    Image(ImageContent),
    Code(CodeContent),
    List(ListContent),
    Divider,
    Poll(PollContent),
    WordCloud(WordCloudContent),
    ChoiceComparison(ChoiceComparisonContent),
    Interactive(InteractiveContent),
    Unknown(Value),
}

impl BlockContent {
    /// Whether this content shape is the one `block_type` requires.
    pub fn matches_type(&self, block_type: &BlockType) -> bool {
        match (self, block_type) {
            (BlockContent::Text(_), BlockType::Text) => true,
            (BlockContent::Video(_), BlockType::Video) => true,
            (BlockContent::Image(_), BlockType::Image) => true,
            (BlockContent::Code(_), BlockType::Code) => true,
            (BlockContent::List(_), BlockType::List) => true,
            (BlockContent::Divider, BlockType::Divider) => true,
            (BlockContent::Poll(_), BlockType::Poll) => true,
            (BlockContent::WordCloud(_), BlockType::WordCloud) => true,
            (BlockContent::ChoiceComparison(_), BlockType::ChoiceComparison) => true,
            (BlockContent::Interactive(_), t) => t.uses_generic_content(),
            (BlockContent::Unknown(_), BlockType::Unknown(_)) => true,
            _ => false,
        }
    }

    /// Short label for diagnostics.
    pub fn shape_label(&self) -> &'static str {
        match self {
            BlockContent::Text(_) => "text",
            BlockContent::Video(_) => "video",
            BlockContent::Image(_) => "image",
            BlockContent::Code(_) => "code",
            BlockContent::List(_) => "list",
            BlockContent::Divider => "divider",
            BlockContent::Poll(_) => "poll",
            BlockContent::WordCloud(_) => "wordCloud",
            BlockContent::ChoiceComparison(_) => "choiceComparison",
            BlockContent::Interactive(_) => "interactive",
            BlockContent::Unknown(_) => "unknown",
        }
    }

    /// Serialize to the persisted JSON shape.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Strict, type-directed deserialization from a persisted value.
    ///
    /// Lenient coercion of arbitrary shapes lives in
    /// [`normalize::normalize`]; this path expects schema-conformant
    /// input and fails on anything else.
    pub fn from_value(block_type: &BlockType, value: Value) -> Result<Self, serde_json::Error> {
        match block_type {
            BlockType::Text => serde_json::from_value(value).map(BlockContent::Text),
            BlockType::Video => serde_json::from_value(value).map(BlockContent::Video),
            BlockType::Image => serde_json::from_value(value).map(BlockContent::Image),
            BlockType::Code => serde_json::from_value(value).map(BlockContent::Code),
            BlockType::List => serde_json::from_value(value).map(BlockContent::List),
            BlockType::Divider => Ok(BlockContent::Divider),
            BlockType::Poll => serde_json::from_value(value).map(BlockContent::Poll),
            BlockType::WordCloud => serde_json::from_value(value).map(BlockContent::WordCloud),
            BlockType::ChoiceComparison => {
                serde_json::from_value(value).map(BlockContent::ChoiceComparison)
            }
            BlockType::Unknown(_) => Ok(BlockContent::Unknown(value)),
            _ => serde_json::from_value(value).map(BlockContent::Interactive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_serializes_camel_case() {
        let video = VideoContent {
            video_source: VideoSource::Embed,
            video_provider: VideoProvider::Youtube,
            video_url: "https://youtu.be/abc123".to_string(),
            title: Some("Intro".to_string()),
            description: None,
        };
        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(value["videoSource"], "embed");
        assert_eq!(value["videoProvider"], "youtube");
        assert_eq!(value["videoUrl"], "https://youtu.be/abc123");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_content_from_value_strict() {
        let value = serde_json::json!({"imageUrl": "/img/a.png", "altText": "A chart"});
        let content = BlockContent::from_value(&BlockType::Image, value).unwrap();
        match content {
            BlockContent::Image(img) => {
                assert_eq!(img.image_url, "/img/a.png");
                assert_eq!(img.alt_text, "A chart");
                assert_eq!(img.caption, None);
            }
            other => panic!("expected image content, got {:?}", other),
        }
    }

    #[test]
    fn test_content_from_value_generic_interactive() {
        let value = serde_json::json!({
            "prompt": "Describe one takeaway.",
            "config": {"minLength": 80}
        });
        let content = BlockContent::from_value(&BlockType::Reflection, value).unwrap();
        match content {
            BlockContent::Interactive(i) => {
                assert_eq!(i.prompt.as_deref(), Some("Describe one takeaway."));
                assert_eq!(i.config["minLength"], 80);
            }
            other => panic!("expected interactive content, got {:?}", other),
        }
    }

    #[test]
    fn test_content_unknown_round_trip() {
        let raw = serde_json::json!({"widget": "hologram", "depth": 3});
        let content =
            BlockContent::from_value(&BlockType::Unknown("hologram".to_string()), raw.clone())
                .unwrap();
        assert_eq!(content.to_value(), raw);
    }

    #[test]
    fn test_content_matches_type() {
        let text = BlockContent::Text(TextContent::new("hi"));
        assert!(text.matches_type(&BlockType::Text));
        assert!(!text.matches_type(&BlockType::Poll));

        let interactive = BlockContent::Interactive(InteractiveContent::default());
        assert!(interactive.matches_type(&BlockType::Reflection));
        assert!(interactive.matches_type(&BlockType::CaseStudy));
        assert!(!interactive.matches_type(&BlockType::Poll));
    }

    #[test]
    fn test_poll_option_votes_default_zero() {
        let opt = PollOption::new("opt-1", "Yes");
        assert_eq!(opt.votes, 0);
        let parsed: PollOption =
            serde_json::from_value(serde_json::json!({"id": "a", "text": "A"})).unwrap();
        assert_eq!(parsed.votes, 0);
    }

    #[test]
    fn test_list_style_from_code_aliases() {
        assert_eq!(ListStyle::from_code("ordered"), Some(ListStyle::Numbered));
        assert_eq!(ListStyle::from_code("checklist"), Some(ListStyle::Checkbox));
        assert_eq!(ListStyle::from_code("plain"), None);
    }
}
