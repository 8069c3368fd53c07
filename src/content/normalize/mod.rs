//! Generation-output normalization
//!
//! Turns arbitrary generated input (a prose string, a JSON object of
//! unknown shape, or an array) into the closest content value for a
//! block type. Normalization never fails: unrecoverable shape
//! mismatches degrade to the smallest valid default for the field and
//! leave missing-required reporting to the validator.
//!
//! Dispatch by input shape:
//! 1. A string is first parsed as strict JSON; structured results
//!    re-enter as objects/arrays, anything else is treated as prose.
//! 2. An array feeds the type's repeating field (items, options,
//!    choices, words); blank entries are dropped and the sequence is
//!    clamped to the schema's maximum, preserving order.
//! 3. An object has alternate key names mapped onto canonical fields
//!    before extraction.

mod language;
mod list;

#[cfg(test)]
mod proptests;

pub(crate) use self::language::sniff_language;

use crate::content::{
    BlockContent, Choice, ChoiceComparisonContent, CodeContent, ImageContent, InteractiveContent,
    ListContent, ListItem, ListStyle, PollContent, PollOption, TextContent, VideoContent,
    VideoProvider, VideoSource, WordCloudContent, WordEntry,
};
use crate::schema::{
    ALT_TEXT_MAX_CHARS, CAPTION_MAX_CHARS, CHOICES_MAX, CODE_MAX_CHARS, LIST_ITEMS_MAX,
    POLL_OPTIONS_MAX, WORDS_MAX, WORD_VALUE_DEFAULT, WORD_VALUE_MAX, WORD_VALUE_MIN,
};
use crate::types::{BlockType, CodeLanguage};
use indexmap::IndexMap;
use serde_json::{Map, Value};

// ============================================================================
// ALIAS TABLES
// ============================================================================

// Alternate key names seen in generated payloads, canonical name first.
const TEXT_KEYS: &[&str] = &["text", "content", "body", "html", "markdown"];
const VIDEO_URL_KEYS: &[&str] = &["videoUrl", "url", "link", "embedUrl", "src"];
const SCRIPT_KEYS: &[&str] = &["script", "narration", "voiceover"];
const IMAGE_URL_KEYS: &[&str] = &["imageUrl", "url", "src"];
const ALT_TEXT_KEYS: &[&str] = &["altText", "alt", "altDescription"];
const CAPTION_KEYS: &[&str] = &["caption", "description"];
const CODE_KEYS: &[&str] = &["code", "snippet", "source"];
const LANGUAGE_KEYS: &[&str] = &["language", "lang"];
const EXPLANATION_KEYS: &[&str] = &["explanation", "notes", "walkthrough"];
const LIST_TYPE_KEYS: &[&str] = &["listType", "type", "style"];
const ITEMS_KEYS: &[&str] = &["items", "list", "entries"];
const QUESTION_KEYS: &[&str] = &["question", "prompt", "title"];
const OPTIONS_KEYS: &[&str] = &["options", "choices", "answers"];
const OPTION_TEXT_KEYS: &[&str] = &["text", "label", "option", "answer"];
const ALLOW_MULTIPLE_KEYS: &[&str] = &["allowMultiple", "multiple", "multiSelect"];
const SHOW_RESULTS_KEYS: &[&str] = &["showResults", "showResult"];
const WORDS_KEYS: &[&str] = &["words", "items", "entries"];
const WORD_TEXT_KEYS: &[&str] = &["text", "word", "label"];
const WORD_VALUE_KEYS: &[&str] = &["value", "weight", "count", "size"];
const MAPPINGS_KEYS: &[&str] = &["mappings", "concepts"];
const CHOICES_KEYS: &[&str] = &["choices", "options"];
const CHOICE_LABEL_KEYS: &[&str] = &["label", "title", "text", "name"];
const CHOICE_DESCRIPTION_KEYS: &[&str] = &["description", "detail"];
const PROMPT_KEYS: &[&str] = &["prompt", "instructions", "instruction", "task"];
const PLACEHOLDER_KEYS: &[&str] = &["placeholder", "hint"];

/// Generic interactive keys that never spill into `config`.
const INTERACTIVE_CONSUMED_KEYS: &[&str] = &[
    "title",
    "question",
    "description",
    "prompt",
    "instructions",
    "instruction",
    "task",
    "placeholder",
    "hint",
    "config",
];

// ============================================================================
// RESULT
// ============================================================================

/// Secondary narrative emitted alongside the primary content (a code
/// explanation, a video script). Shown to the author, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorNote {
    pub label: &'static str,
    pub text: String,
}

/// Outcome of normalizing one generated value.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Best-effort content for the block type.
    pub content: BlockContent,
    /// Side-channel entries destined for the block's `meta` map
    /// (e.g. poll discussion questions).
    pub meta: IndexMap<String, Value>,
    /// Ephemeral author-facing notes.
    pub notes: Vec<AuthorNote>,
}

impl Normalized {
    fn of(content: BlockContent) -> Self {
        Self {
            content,
            meta: IndexMap::new(),
            notes: Vec::new(),
        }
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Normalize a generated value into content for `block_type`.
///
/// `prior` is the block's current content, consulted for fallbacks that
/// the schema cannot supply (a code block's existing language, a video
/// block's existing URL).
pub fn normalize(block_type: &BlockType, raw: &Value, prior: Option<&BlockContent>) -> Normalized {
    // A string that parses as structured JSON re-enters as that
    // structure; scalars and parse failures stay on the prose path.
    let reparsed;
    let raw = match raw {
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(v @ (Value::Object(_) | Value::Array(_))) => {
                reparsed = v;
                &reparsed
            }
            _ => raw,
        },
        _ => raw,
    };

    match block_type {
        BlockType::Text => Normalized::of(BlockContent::Text(normalize_text(raw))),
        BlockType::Video => normalize_video(raw, prior_video(prior)),
        BlockType::Image => Normalized::of(BlockContent::Image(normalize_image(
            raw,
            prior_image(prior),
        ))),
        BlockType::Code => normalize_code(raw, prior_code(prior)),
        BlockType::List => Normalized::of(BlockContent::List(normalize_list(raw))),
        BlockType::Divider => Normalized::of(BlockContent::Divider),
        BlockType::Poll => normalize_poll(raw),
        BlockType::WordCloud => Normalized::of(BlockContent::WordCloud(normalize_word_cloud(raw))),
        BlockType::ChoiceComparison => Normalized::of(BlockContent::ChoiceComparison(
            normalize_choice_comparison(raw),
        )),
        BlockType::Unknown(_) => Normalized::of(BlockContent::Unknown(raw.clone())),
        _ => Normalized::of(BlockContent::Interactive(normalize_interactive(raw))),
    }
}

// ============================================================================
// PER-TYPE NORMALIZERS
// ============================================================================

fn normalize_text(raw: &Value) -> TextContent {
    match raw {
        // Stored markup is opaque; prose is kept verbatim.
        Value::String(s) => TextContent::new(s.clone()),
        Value::Array(items) => {
            let paragraphs: Vec<String> = items.iter().filter_map(scalar_text).collect();
            TextContent::new(paragraphs.join("\n\n"))
        }
        // Markup is opaque: no trimming, no blank filtering.
        Value::Object(obj) => TextContent::new(
            TEXT_KEYS
                .iter()
                .filter_map(|key| obj.get(*key))
                .find_map(Value::as_str)
                .unwrap_or_default(),
        ),
        _ => TextContent::default(),
    }
}

fn normalize_video(raw: &Value, prior: Option<&VideoContent>) -> Normalized {
    let mut video = prior.cloned().unwrap_or_default();
    let mut notes = Vec::new();

    match raw {
        Value::String(s) => {
            if looks_like_url(s) {
                video.video_url = s.trim().to_string();
                infer_video_route(&mut video);
            } else if let Some(title) = non_blank(s) {
                video.title = Some(title);
            }
        }
        Value::Array(items) => {
            // No repeating field on video blocks; the first usable
            // element carries the payload.
            if let Some(first) = items.first() {
                return normalize_video(first, Some(&video));
            }
        }
        Value::Object(obj) => {
            if let Some(url) = string_field(obj, VIDEO_URL_KEYS) {
                video.video_url = url;
            }
            if let Some(title) = string_field(obj, &["title", "name"]) {
                video.title = Some(title);
            }
            if let Some(description) = string_field(obj, &["description", "summary"]) {
                video.description = Some(description);
            }
            let explicit_source = string_field(obj, &["videoSource", "source"])
                .and_then(|s| parse_video_source(&s));
            let explicit_provider = string_field(obj, &["videoProvider", "provider"])
                .and_then(|s| parse_video_provider(&s));
            match (explicit_source, explicit_provider) {
                (Some(source), Some(provider)) => {
                    video.video_source = source;
                    video.video_provider = provider;
                }
                (source, provider) => {
                    infer_video_route(&mut video);
                    if let Some(source) = source {
                        video.video_source = source;
                    }
                    if let Some(provider) = provider {
                        video.video_provider = provider;
                    }
                }
            }
            if let Some(script) = string_field(obj, SCRIPT_KEYS) {
                notes.push(AuthorNote {
                    label: "script",
                    text: script,
                });
            }
        }
        _ => {}
    }

    let mut normalized = Normalized::of(BlockContent::Video(video));
    normalized.notes = notes;
    normalized
}

/// Derive source/provider from the URL when the payload does not say.
fn infer_video_route(video: &mut VideoContent) {
    let url = video.video_url.to_lowercase();
    if url.contains("youtube.com") || url.contains("youtu.be") {
        video.video_source = VideoSource::Embed;
        video.video_provider = VideoProvider::Youtube;
    } else if url.contains("vimeo.com") {
        video.video_source = VideoSource::Embed;
        video.video_provider = VideoProvider::Vimeo;
    } else if !url.is_empty() {
        video.video_source = VideoSource::Upload;
        video.video_provider = VideoProvider::S3;
    }
}

fn parse_video_source(code: &str) -> Option<VideoSource> {
    match code.to_lowercase().as_str() {
        "upload" => Some(VideoSource::Upload),
        "embed" => Some(VideoSource::Embed),
        _ => None,
    }
}

fn parse_video_provider(code: &str) -> Option<VideoProvider> {
    match code.to_lowercase().as_str() {
        "youtube" => Some(VideoProvider::Youtube),
        "vimeo" => Some(VideoProvider::Vimeo),
        "s3" => Some(VideoProvider::S3),
        _ => None,
    }
}

fn normalize_image(raw: &Value, prior: Option<&ImageContent>) -> ImageContent {
    let mut image = prior.cloned().unwrap_or_default();
    match raw {
        Value::String(s) => {
            if looks_like_url(s) {
                image.image_url = s.trim().to_string();
            } else if let Some(alt) = non_blank(s) {
                image.alt_text = truncate_chars(&alt, ALT_TEXT_MAX_CHARS);
            }
        }
        Value::Array(items) => {
            if let Some(first) = items.first() {
                return normalize_image(first, Some(&image));
            }
        }
        Value::Object(obj) => {
            if let Some(url) = string_field(obj, IMAGE_URL_KEYS) {
                image.image_url = url;
            }
            if let Some(alt) = string_field(obj, ALT_TEXT_KEYS) {
                image.alt_text = truncate_chars(&alt, ALT_TEXT_MAX_CHARS);
            }
            if let Some(caption) = string_field(obj, CAPTION_KEYS) {
                image.caption = Some(truncate_chars(&caption, CAPTION_MAX_CHARS));
            }
        }
        _ => {}
    }
    // The cap holds regardless of where the alt text came from.
    image.alt_text = truncate_chars(&image.alt_text, ALT_TEXT_MAX_CHARS);
    image
}

fn normalize_code(raw: &Value, prior: Option<&CodeContent>) -> Normalized {
    let prior_language = prior.map(|c| c.language);
    let mut notes = Vec::new();

    let (code, explicit_language) = match raw {
        Value::String(s) => (s.clone(), None),
        Value::Array(lines) => {
            let joined: Vec<String> = lines.iter().filter_map(scalar_text).collect();
            (joined.join("\n"), None)
        }
        Value::Object(obj) => {
            let code = string_field(obj, CODE_KEYS).unwrap_or_default();
            let language =
                string_field(obj, LANGUAGE_KEYS).and_then(|s| CodeLanguage::from_code(&s));
            if let Some(explanation) = string_field(obj, EXPLANATION_KEYS) {
                notes.push(AuthorNote {
                    label: "explanation",
                    text: explanation,
                });
            }
            (code, language)
        }
        _ => (String::new(), None),
    };

    let code = truncate_chars(&code, CODE_MAX_CHARS);
    let language =
        explicit_language.unwrap_or_else(|| sniff_language(&code, prior_language));

    let mut normalized = Normalized::of(BlockContent::Code(CodeContent { code, language }));
    normalized.notes = notes;
    normalized
}

fn normalize_list(raw: &Value) -> ListContent {
    let mut explicit_style = None;
    let mut saw_checked = false;

    let items: Vec<ListItem> = match raw {
        Value::String(s) => list::split_prose_items(s)
            .into_iter()
            .map(ListItem::new)
            .collect(),
        Value::Array(entries) => collect_list_items(entries, &mut saw_checked),
        Value::Object(obj) => {
            explicit_style =
                string_field(obj, LIST_TYPE_KEYS).and_then(|s| ListStyle::from_code(&s));
            match field(obj, ITEMS_KEYS) {
                Some(Value::Array(entries)) => collect_list_items(entries, &mut saw_checked),
                Some(Value::String(s)) => list::split_prose_items(s)
                    .into_iter()
                    .map(ListItem::new)
                    .collect(),
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    };

    let mut items = items;
    items.truncate(LIST_ITEMS_MAX);

    // Explicit listType in the same payload always wins over inference.
    let list_type =
        explicit_style.unwrap_or_else(|| list::infer_style(&items, saw_checked));
    ListContent { list_type, items }
}

fn collect_list_items(entries: &[Value], saw_checked: &mut bool) -> Vec<ListItem> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(s) => non_blank(list::strip_marker(s)).map(ListItem::new),
            Value::Object(obj) => {
                let checked = bool_field(obj, &["checked", "done", "complete"]);
                if checked.is_some() {
                    *saw_checked = true;
                }
                string_field(obj, &["text", "item", "label", "name"]).map(|text| ListItem {
                    text,
                    checked,
                })
            }
            other => scalar_text(other).map(ListItem::new),
        })
        .collect()
}

fn normalize_poll(raw: &Value) -> Normalized {
    let mut poll = PollContent {
        show_results: true,
        ..PollContent::default()
    };
    let mut meta = IndexMap::new();

    match raw {
        Value::String(s) => {
            if let Some(question) = non_blank(s) {
                poll.question = question;
            }
        }
        Value::Array(entries) => {
            poll.options = collect_poll_options(entries);
        }
        Value::Object(obj) => {
            if let Some(question) = string_field(obj, QUESTION_KEYS) {
                poll.question = question;
            }
            match field(obj, OPTIONS_KEYS) {
                Some(Value::Array(entries)) => poll.options = collect_poll_options(entries),
                // Options may arrive as one delimited string.
                Some(Value::String(s)) => {
                    poll.options = collect_poll_options(
                        &split_delimited(s).into_iter().map(Value::String).collect::<Vec<_>>(),
                    );
                }
                _ => {}
            }
            if let Some(allow) = bool_field(obj, ALLOW_MULTIPLE_KEYS) {
                poll.allow_multiple = allow;
            }
            if let Some(show) = bool_field(obj, SHOW_RESULTS_KEYS) {
                poll.show_results = show;
            }
            // Discussion questions ride the meta side-channel, never content.
            if let Some(questions) = obj.get("discussionQuestions") {
                if !questions.is_null() {
                    meta.insert("discussionQuestions".to_string(), questions.clone());
                }
            }
        }
        _ => {}
    }

    let mut normalized = Normalized::of(BlockContent::Poll(poll));
    normalized.meta = meta;
    normalized
}

fn collect_poll_options(entries: &[Value]) -> Vec<PollOption> {
    let mut options: Vec<PollOption> = entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(s) => non_blank(s).map(|text| PollOption::new("", text)),
            Value::Object(obj) => {
                let text = string_field(obj, OPTION_TEXT_KEYS)?;
                let id = string_field(obj, &["id"]).unwrap_or_default();
                Some(PollOption::new(id, text))
            }
            other => scalar_text(other).map(|text| PollOption::new("", text)),
        })
        .collect();
    options.truncate(POLL_OPTIONS_MAX);
    for (i, option) in options.iter_mut().enumerate() {
        if option.id.trim().is_empty() {
            option.id = format!("opt-{}", i + 1);
        }
        // Votes are always reset; live tallies never persist.
        option.votes = 0;
    }
    options
}

fn normalize_word_cloud(raw: &Value) -> WordCloudContent {
    let mut cloud = WordCloudContent::default();

    match raw {
        Value::String(s) => {
            cloud.words = collect_words(
                &split_delimited(s).into_iter().map(Value::String).collect::<Vec<_>>(),
            );
        }
        Value::Array(entries) => {
            cloud.words = collect_words(entries);
        }
        Value::Object(obj) => {
            cloud.title = string_field(obj, &["title", "name"]);
            cloud.description = string_field(obj, &["description", "summary"]);
            match field(obj, WORDS_KEYS) {
                Some(Value::Array(entries)) => cloud.words = collect_words(entries),
                Some(Value::String(s)) => {
                    cloud.words = collect_words(
                        &split_delimited(s).into_iter().map(Value::String).collect::<Vec<_>>(),
                    );
                }
                _ => {}
            }
            if let Some(Value::Object(mappings)) = field(obj, MAPPINGS_KEYS) {
                for (word, concept) in mappings {
                    if let Some(concept) = concept.as_str() {
                        cloud.mappings.insert(word.clone(), concept.to_string());
                    }
                }
            }
        }
        _ => {}
    }
    cloud
}

fn collect_words(entries: &[Value]) -> Vec<WordEntry> {
    let mut words: Vec<WordEntry> = entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(s) => non_blank(s).map(|text| WordEntry::new(text, WORD_VALUE_DEFAULT)),
            Value::Object(obj) => {
                let text = string_field(obj, WORD_TEXT_KEYS)?;
                let value = number_field(obj, WORD_VALUE_KEYS)
                    .map(clamp_word_value)
                    .unwrap_or(WORD_VALUE_DEFAULT);
                Some(WordEntry::new(text, value))
            }
            other => scalar_text(other).map(|text| WordEntry::new(text, WORD_VALUE_DEFAULT)),
        })
        .collect();
    words.truncate(WORDS_MAX);
    words
}

fn clamp_word_value(value: f64) -> u8 {
    let rounded = value.round();
    if rounded < WORD_VALUE_MIN as f64 {
        WORD_VALUE_MIN
    } else if rounded > WORD_VALUE_MAX as f64 {
        WORD_VALUE_MAX
    } else {
        rounded as u8
    }
}

fn normalize_choice_comparison(raw: &Value) -> ChoiceComparisonContent {
    let mut comparison = ChoiceComparisonContent::default();

    match raw {
        Value::String(s) => {
            if let Some(question) = non_blank(s) {
                comparison.question = question;
            }
        }
        Value::Array(entries) => {
            comparison.choices = collect_choices(entries);
        }
        Value::Object(obj) => {
            if let Some(question) = string_field(obj, QUESTION_KEYS) {
                comparison.question = question;
            }
            comparison.title = string_field(obj, &["title", "name"]);
            match field(obj, CHOICES_KEYS) {
                Some(Value::Array(entries)) => comparison.choices = collect_choices(entries),
                Some(Value::String(s)) => {
                    comparison.choices = collect_choices(
                        &split_delimited(s).into_iter().map(Value::String).collect::<Vec<_>>(),
                    );
                }
                _ => {}
            }
        }
        _ => {}
    }
    comparison
}

fn collect_choices(entries: &[Value]) -> Vec<Choice> {
    let mut choices: Vec<Choice> = entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(s) => non_blank(s).map(Choice::new),
            Value::Object(obj) => {
                let label = string_field(obj, CHOICE_LABEL_KEYS)?;
                let description = string_field(obj, CHOICE_DESCRIPTION_KEYS);
                Some(Choice { label, description })
            }
            other => scalar_text(other).map(Choice::new),
        })
        .collect();
    choices.truncate(CHOICES_MAX);
    choices
}

fn normalize_interactive(raw: &Value) -> InteractiveContent {
    let mut interactive = InteractiveContent::default();

    match raw {
        Value::String(s) => {
            interactive.prompt = non_blank(s);
        }
        Value::Array(entries) => {
            let joined: Vec<String> = entries.iter().filter_map(scalar_text).collect();
            interactive.prompt = non_blank(&joined.join("\n"));
        }
        Value::Object(obj) => {
            interactive.title = string_field(obj, &["title", "name"]);
            interactive.question = string_field(obj, &["question", "q"]);
            interactive.description = string_field(obj, &["description", "desc", "summary"]);
            interactive.prompt = string_field(obj, PROMPT_KEYS);
            interactive.placeholder = string_field(obj, PLACEHOLDER_KEYS);
            if let Some(Value::Object(config)) = obj.get("config") {
                for (key, value) in config {
                    interactive.config.insert(key.clone(), value.clone());
                }
            }
            // Unconsumed keys land in config so type-specific extensions
            // survive a round-trip through generation.
            for (key, value) in obj {
                let consumed = INTERACTIVE_CONSUMED_KEYS.contains(&key.as_str())
                    || ["name", "q", "desc", "summary"].contains(&key.as_str());
                if !consumed && !value.is_null() {
                    interactive.config.insert(key.clone(), value.clone());
                }
            }
        }
        _ => {}
    }
    interactive
}

// ============================================================================
// SHARED COERCION HELPERS
// ============================================================================

fn prior_video(prior: Option<&BlockContent>) -> Option<&VideoContent> {
    match prior {
        Some(BlockContent::Video(v)) => Some(v),
        _ => None,
    }
}

fn prior_image(prior: Option<&BlockContent>) -> Option<&ImageContent> {
    match prior {
        Some(BlockContent::Image(i)) => Some(i),
        _ => None,
    }
}

fn prior_code(prior: Option<&BlockContent>) -> Option<&CodeContent> {
    match prior {
        Some(BlockContent::Code(c)) => Some(c),
        _ => None,
    }
}

/// First present value under any alias.
fn field<'a>(obj: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| obj.get(*key))
}

/// First non-blank string under any alias, trimmed.
fn string_field(obj: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|key| obj.get(*key))
        .find_map(|v| v.as_str().and_then(non_blank))
}

/// First numeric value under any alias, accepting numeric strings.
fn number_field(obj: &Map<String, Value>, aliases: &[&str]) -> Option<f64> {
    aliases.iter().filter_map(|key| obj.get(*key)).find_map(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// First boolean under any alias, accepting "true"/"false" strings.
fn bool_field(obj: &Map<String, Value>, aliases: &[&str]) -> Option<bool> {
    aliases.iter().filter_map(|key| obj.get(*key)).find_map(|v| match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Render a scalar as display text; objects and nulls yield nothing.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn looks_like_url(s: &str) -> bool {
    let t = s.trim();
    t.starts_with("http://") || t.starts_with("https://") || t.starts_with("www.") || t.starts_with('/')
}

/// Hard character-boundary truncation, preserving the prefix.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    s.chars().take(max).collect()
}

/// Split a delimited option/word string on newlines, falling back to commas.
fn split_delimited(s: &str) -> Vec<String> {
    let lines: Vec<String> = if s.contains('\n') {
        s.lines().map(str::to_string).collect()
    } else {
        s.split(',').map(str::to_string).collect()
    };
    lines
        .into_iter()
        .filter_map(|part| non_blank(list::strip_marker(&part)))
        .collect()
}
