//! Block schema registry
//!
//! Declares, per block type, the content fields with their kinds,
//! required flags, and length/count bounds. The registry is a set of
//! process-wide `const` tables behind an exhaustive match, so adding a
//! block type without registering a schema fails to compile rather than
//! at runtime.

use crate::content::{
    BlockContent, Choice, ChoiceComparisonContent, CodeContent, ImageContent, InteractiveContent,
    ListContent, ListItem, ListStyle, PollContent, PollOption, TextContent, VideoContent,
    VideoProvider, VideoSource, WordCloudContent, WordEntry,
};
use crate::types::{BlockType, CodeLanguage};

// ============================================================================
// BOUNDS
// ============================================================================

/// Accessibility contract: alt text is hard-capped, never relaxed.
pub const ALT_TEXT_MAX_CHARS: usize = 125;
pub const CAPTION_MAX_CHARS: usize = 500;
pub const CODE_MAX_CHARS: usize = 10_000;

pub const LIST_ITEMS_MIN: usize = 1;
pub const LIST_ITEMS_MAX: usize = 100;

pub const QUESTION_MIN_CHARS: usize = 5;
pub const QUESTION_MAX_CHARS: usize = 500;

pub const POLL_OPTIONS_MIN: usize = 2;
pub const POLL_OPTIONS_MAX: usize = 10;
pub const POLL_OPTION_TEXT_MIN: usize = 1;
pub const POLL_OPTION_TEXT_MAX: usize = 200;

pub const CHOICES_MIN: usize = 2;
pub const CHOICES_MAX: usize = 6;

pub const WORDS_MIN: usize = 1;
pub const WORDS_MAX: usize = 100;
pub const WORD_VALUE_MIN: u8 = 1;
pub const WORD_VALUE_MAX: u8 = 100;
/// Weight assigned when a generated word carries none.
pub const WORD_VALUE_DEFAULT: u8 = 50;

// ============================================================================
// FIELD SPECS
// ============================================================================

/// Kind of a content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Bool,
    /// Open key-value map, threaded through as opaque data.
    Map,
    /// String restricted to the listed codes.
    Enum(&'static [&'static str]),
    /// Ordered sequence whose elements follow the nested specs.
    Array(&'static [FieldSpec]),
}

/// Declaration of one content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Minimum length in characters (string fields).
    pub min_len: Option<usize>,
    /// Maximum length in characters (string fields).
    pub max_len: Option<usize>,
    /// Minimum element count (array fields).
    pub min_count: Option<usize>,
    /// Maximum element count (array fields).
    pub max_count: Option<usize>,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            kind,
            required,
            min_len: None,
            max_len: None,
            min_count: None,
            max_count: None,
        }
    }

    const fn string(name: &'static str, required: bool) -> Self {
        Self::new(name, FieldKind::String, required)
    }

    const fn bounded_string(
        name: &'static str,
        required: bool,
        min_len: Option<usize>,
        max_len: Option<usize>,
    ) -> Self {
        let mut spec = Self::new(name, FieldKind::String, required);
        spec.min_len = min_len;
        spec.max_len = max_len;
        spec
    }

    const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Bool, false)
    }

    const fn number(name: &'static str) -> Self {
        Self::new(name, FieldKind::Number, false)
    }

    const fn map(name: &'static str) -> Self {
        Self::new(name, FieldKind::Map, false)
    }

    const fn enumeration(
        name: &'static str,
        required: bool,
        values: &'static [&'static str],
    ) -> Self {
        Self::new(name, FieldKind::Enum(values), required)
    }

    const fn array(
        name: &'static str,
        item_fields: &'static [FieldSpec],
        min_count: usize,
        max_count: usize,
    ) -> Self {
        let mut spec = Self::new(name, FieldKind::Array(item_fields), true);
        spec.min_count = Some(min_count);
        spec.max_count = Some(max_count);
        spec
    }
}

// ============================================================================
// REGISTRY TABLES
// ============================================================================

const TEXT_FIELDS: &[FieldSpec] = &[FieldSpec::string("text", true)];

const VIDEO_FIELDS: &[FieldSpec] = &[
    FieldSpec::enumeration("videoSource", true, VideoSource::CODES),
    FieldSpec::enumeration("videoProvider", true, VideoProvider::CODES),
    FieldSpec::string("videoUrl", true),
    FieldSpec::string("title", false),
    FieldSpec::string("description", false),
];

const IMAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::string("imageUrl", true),
    FieldSpec::bounded_string("altText", true, None, Some(ALT_TEXT_MAX_CHARS)),
    FieldSpec::bounded_string("caption", false, None, Some(CAPTION_MAX_CHARS)),
];

const CODE_FIELDS: &[FieldSpec] = &[
    FieldSpec::bounded_string("code", true, None, Some(CODE_MAX_CHARS)),
    FieldSpec::enumeration("language", true, CodeLanguage::CODES),
];

const LIST_ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec::string("text", true),
    FieldSpec::boolean("checked"),
];

const LIST_FIELDS: &[FieldSpec] = &[
    FieldSpec::enumeration("listType", true, ListStyle::CODES),
    FieldSpec::array("items", LIST_ITEM_FIELDS, LIST_ITEMS_MIN, LIST_ITEMS_MAX),
];

const POLL_OPTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::string("id", true),
    FieldSpec::bounded_string(
        "text",
        true,
        Some(POLL_OPTION_TEXT_MIN),
        Some(POLL_OPTION_TEXT_MAX),
    ),
    FieldSpec::number("votes"),
];

const POLL_FIELDS: &[FieldSpec] = &[
    FieldSpec::bounded_string(
        "question",
        true,
        Some(QUESTION_MIN_CHARS),
        Some(QUESTION_MAX_CHARS),
    ),
    FieldSpec::array("options", POLL_OPTION_FIELDS, POLL_OPTIONS_MIN, POLL_OPTIONS_MAX),
    FieldSpec::boolean("allowMultiple"),
    FieldSpec::boolean("showResults"),
];

const WORD_FIELDS: &[FieldSpec] = &[
    FieldSpec::string("text", true),
    FieldSpec::number("value"),
];

const WORD_CLOUD_FIELDS: &[FieldSpec] = &[
    FieldSpec::string("title", false),
    FieldSpec::string("description", false),
    FieldSpec::array("words", WORD_FIELDS, WORDS_MIN, WORDS_MAX),
    FieldSpec::map("mappings"),
];

const CHOICE_FIELDS: &[FieldSpec] = &[
    FieldSpec::string("label", true),
    FieldSpec::string("description", false),
];

const CHOICE_COMPARISON_FIELDS: &[FieldSpec] = &[
    FieldSpec::bounded_string(
        "question",
        true,
        Some(QUESTION_MIN_CHARS),
        Some(QUESTION_MAX_CHARS),
    ),
    FieldSpec::string("title", false),
    FieldSpec::array("choices", CHOICE_FIELDS, CHOICES_MIN, CHOICES_MAX),
];

const INTERACTIVE_FIELDS: &[FieldSpec] = &[
    FieldSpec::string("title", false),
    FieldSpec::string("question", false),
    FieldSpec::string("description", false),
    FieldSpec::string("prompt", false),
    FieldSpec::string("placeholder", false),
    FieldSpec::map("config"),
];

const DIVIDER_FIELDS: &[FieldSpec] = &[];

// ============================================================================
// LOOKUP
// ============================================================================

/// Get the field specs for a registered block type.
///
/// # Panics
///
/// Calling this with an `Unknown` type is a programming error: dispatch
/// code must gate on [`BlockType::is_registered`] first.
pub fn schema_for(block_type: &BlockType) -> &'static [FieldSpec] {
    match block_type {
        BlockType::Text => TEXT_FIELDS,
        BlockType::Video => VIDEO_FIELDS,
        BlockType::Image => IMAGE_FIELDS,
        BlockType::Code => CODE_FIELDS,
        BlockType::List => LIST_FIELDS,
        BlockType::Divider => DIVIDER_FIELDS,
        BlockType::Poll => POLL_FIELDS,
        BlockType::WordCloud => WORD_CLOUD_FIELDS,
        BlockType::ChoiceComparison => CHOICE_COMPARISON_FIELDS,
        BlockType::Unknown(code) => panic!(
            "no schema registered for block type \"{}\"; gate on BlockType::is_registered()",
            code
        ),
        _ => INTERACTIVE_FIELDS,
    }
}

/// Minimal valid default content for a freshly created block.
///
/// Required URL fields point at placeholder assets so every default
/// passes validation with zero violations.
///
/// # Panics
///
/// Same contract as [`schema_for`]: never call with an `Unknown` type.
pub fn default_content(block_type: &BlockType) -> BlockContent {
    match block_type {
        BlockType::Text => BlockContent::Text(TextContent::new("New text block")),
        BlockType::Video => BlockContent::Video(VideoContent {
            video_source: VideoSource::Upload,
            video_provider: VideoProvider::S3,
            video_url: "/assets/placeholder-video.mp4".to_string(),
            title: None,
            description: None,
        }),
        BlockType::Image => BlockContent::Image(ImageContent {
            image_url: "/assets/placeholder-image.png".to_string(),
            alt_text: "Placeholder image".to_string(),
            caption: None,
        }),
        BlockType::Code => BlockContent::Code(CodeContent {
            code: "print(\"Hello, world!\")".to_string(),
            language: CodeLanguage::Python,
        }),
        BlockType::List => BlockContent::List(ListContent {
            list_type: ListStyle::Bullet,
            items: vec![ListItem::new("First item")],
        }),
        BlockType::Divider => BlockContent::Divider,
        BlockType::Poll => BlockContent::Poll(PollContent {
            question: "What stood out to you?".to_string(),
            options: vec![PollOption::new("opt-1", "Option A"), PollOption::new("opt-2", "Option B")],
            allow_multiple: false,
            show_results: true,
        }),
        BlockType::WordCloud => BlockContent::WordCloud(WordCloudContent {
            title: None,
            description: None,
            words: vec![WordEntry::new("Ideas", WORD_VALUE_DEFAULT)],
            mappings: Default::default(),
        }),
        BlockType::ChoiceComparison => BlockContent::ChoiceComparison(ChoiceComparisonContent {
            question: "Which approach fits best?".to_string(),
            title: None,
            choices: vec![Choice::new("Option A"), Choice::new("Option B")],
        }),
        BlockType::Unknown(code) => panic!(
            "no default content for block type \"{}\"; gate on BlockType::is_registered()",
            code
        ),
        _ => BlockContent::Interactive(InteractiveContent::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_registered_for_every_type() {
        for t in BlockType::all() {
            // Divider is legitimately empty; everything else declares fields.
            let specs = schema_for(&t);
            if t != BlockType::Divider {
                assert!(!specs.is_empty(), "empty schema for {}", t.code());
            }
        }
    }

    #[test]
    fn test_schema_generic_interactive_shared() {
        assert_eq!(
            schema_for(&BlockType::Reflection),
            schema_for(&BlockType::CaseStudy)
        );
        assert_ne!(schema_for(&BlockType::Poll), schema_for(&BlockType::List));
    }

    #[test]
    #[should_panic(expected = "no schema registered")]
    fn test_schema_unknown_type_fails_fast() {
        schema_for(&BlockType::Unknown("hologram".to_string()));
    }

    #[test]
    fn test_default_content_matches_type() {
        for t in BlockType::all() {
            assert!(
                default_content(&t).matches_type(&t),
                "default shape mismatch for {}",
                t.code()
            );
        }
    }

    #[test]
    fn test_poll_schema_bounds() {
        let options = POLL_FIELDS.iter().find(|f| f.name == "options").unwrap();
        assert_eq!(options.min_count, Some(2));
        assert_eq!(options.max_count, Some(10));
        match options.kind {
            FieldKind::Array(item) => {
                let text = item.iter().find(|f| f.name == "text").unwrap();
                assert_eq!(text.min_len, Some(1));
                assert_eq!(text.max_len, Some(200));
            }
            _ => panic!("options must be an array field"),
        }
    }

    #[test]
    fn test_alt_text_spec_carries_accessibility_cap() {
        let alt = IMAGE_FIELDS.iter().find(|f| f.name == "altText").unwrap();
        assert!(alt.required);
        assert_eq!(alt.max_len, Some(125));
    }
}
