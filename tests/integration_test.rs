//! Integration tests for the block pipeline: generation output through
//! normalization, validation, admission, and rendering.

use lectern::{
    normalize, render, render_lesson, validate, Block, BlockContent, BlockError, BlockType,
    CodeLanguage, EditorSession, GenerationStatus, Lesson, RenderMode, StoredBlock,
};
use serde_json::{json, Value};

/// Surface the core's tracing output (unknown-type warnings, stale
/// discards) when a test run needs it; safe to call repeatedly.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// A generation result arriving as a JSON string for a code block:
/// parsed, language sniffed with fallback, and accepted by validation.
#[test]
fn test_code_generation_json_string_end_to_end() {
    let raw = Value::String("{\"code\":\"print(1)\",\"language\":null}".to_string());
    let normalized = normalize(&BlockType::Code, &raw, None);

    match &normalized.content {
        BlockContent::Code(code) => {
            assert_eq!(code.code, "print(1)");
            assert_eq!(code.language, CodeLanguage::Python);
        }
        other => panic!("expected code content, got {:?}", other),
    }
    let report = validate(&BlockType::Code, &normalized.content);
    assert!(report.is_valid(), "unexpected violations: {}", report);
}

/// A bare prose string of three sentences for a list block: three
/// items, no sequence/task vocabulary, bullet style.
#[test]
fn test_list_generation_prose_end_to_end() {
    let raw = Value::String(
        "Water the plants every morning.\nRotate the pots weekly.\nRefill the feeder.".to_string(),
    );
    let normalized = normalize(&BlockType::List, &raw, None);
    match &normalized.content {
        BlockContent::List(list) => {
            assert_eq!(list.items.len(), 3);
            assert_eq!(list.list_type.code(), "bullet");
        }
        other => panic!("expected list content, got {:?}", other),
    }
    assert!(validate(&BlockType::List, &normalized.content).is_valid());
}

/// Full authoring round: create, generate, edit, save, admit, persist,
/// reload, render.
#[test]
fn test_authoring_round_trip() {
    let mut lesson = Lesson::new();
    lesson.append(BlockType::Text);
    let poll_id = lesson.append(BlockType::Poll).id.clone();

    // Author opens the poll, a generation result arrives.
    let mut session = EditorSession::open(lesson.get(&poll_id).unwrap()).unwrap();
    let ticket = session.begin_generation();
    let status = session.apply_generation(
        ticket,
        &json!({
            "question": "Which refactoring should we tackle first?",
            "choices": ["Extract the parser", "Split the god object", "Delete dead flags"],
            "discussionQuestions": ["What made you rank it first?"]
        }),
    );
    assert_eq!(status, GenerationStatus::Applied);

    // Save emits the full replacement value plus meta side-channel.
    let saved = session.save().unwrap();
    lesson.replace_content(&poll_id, saved.content).unwrap();
    lesson.merge_meta(&poll_id, saved.meta).unwrap();

    let stored = lesson.to_stored();
    let reloaded = Lesson::from_stored(stored);
    let poll_block = reloaded
        .blocks_ordered()
        .into_iter()
        .find(|b| b.id.as_str() == poll_id.as_str())
        .unwrap();
    assert!(poll_block.meta.contains_key("discussionQuestions"));

    let preview = render_lesson(&reloaded, RenderMode::Preview);
    assert!(preview.contains("Which refactoring should we tackle first?"));
    assert!(preview.contains("type=\"radio\""));

    let published = render_lesson(&reloaded, RenderMode::Published);
    assert!(published.contains("Which refactoring should we tackle first?"));
    assert!(!published.contains("type=\"radio\""));
}

/// Unknown block types survive loading, render a labeled fallback, and
/// refuse an editor without panicking.
#[test]
fn test_unknown_type_is_safe_everywhere() {
    init_tracing();
    let records = vec![StoredBlock {
        id: "mystery-1".to_string(),
        block_type: "hologram".to_string(),
        order: 10,
        content: json!({"depth": 3, "spin": "fast"}),
        meta: Default::default(),
    }];
    let lesson = Lesson::from_stored(records);
    let block = lesson.blocks_ordered()[0];

    let html = render(block, RenderMode::Published);
    assert!(html.contains("block-unknown"));
    assert!(html.contains("hologram"));

    match EditorSession::open(block) {
        Err(BlockError::UnknownType(code)) => assert_eq!(code, "hologram"),
        other => panic!("expected refusal, got {:?}", other),
    }

    // Content survives the round trip untouched.
    let stored = lesson.to_stored();
    assert_eq!(stored[0].content, json!({"depth": 3, "spin": "fast"}));
}

/// Generated alt text of any length is capped by the time it renders.
#[test]
fn test_alt_text_cap_holds_through_pipeline() {
    let mut lesson = Lesson::new();
    let image_id = lesson.append(BlockType::Image).id.clone();

    let mut session = EditorSession::open(lesson.get(&image_id).unwrap()).unwrap();
    let ticket = session.begin_generation();
    session.apply_generation(
        ticket,
        &json!({
            "imageUrl": "https://cdn.example.com/roadmap.png",
            "altText": "An extremely long description ".repeat(40)
        }),
    );
    let saved = session.save().unwrap();
    match &saved.content {
        BlockContent::Image(image) => assert!(image.alt_text.chars().count() <= 125),
        other => panic!("expected image content, got {:?}", other),
    }
    lesson.replace_content(&image_id, saved.content).unwrap();
    let html = render(lesson.get(&image_id).unwrap(), RenderMode::Published);
    assert!(html.contains("alt=\""));
}

/// A result for an abandoned generation request never mutates the
/// block, even though it arrives well-formed.
#[test]
fn test_stale_generation_never_applies() {
    let block = Block::new(BlockType::Text);
    let mut session = EditorSession::open(&block).unwrap();

    let first = session.begin_generation();
    let second = session.begin_generation();

    let stale = session.apply_generation(first, &json!({"text": "<p>old run</p>"}));
    assert_eq!(stale, GenerationStatus::Stale);
    assert_eq!(session.draft(), &block.content);

    let fresh = session.apply_generation(second, &json!({"text": "<p>new run</p>"}));
    assert_eq!(fresh, GenerationStatus::Applied);
    let saved = session.save().unwrap();
    assert!(saved.content.to_value().to_string().contains("new run"));
}

/// Validation failures carry every violation so the editor can flag
/// all fields at once, and the save is blocked until resolved.
#[test]
fn test_save_surfaces_all_violations() {
    let block = Block::new(BlockType::Poll);
    let mut session = EditorSession::open(&block).unwrap();
    let ticket = session.begin_generation();
    // Question too short AND only one usable option.
    session.apply_generation(ticket, &json!({"question": "Ok?", "options": ["Yes", ""]}));
    match session.save() {
        Err(BlockError::Validation(report)) => {
            assert!(report.flags_field("question"));
            assert!(report.flags_field("options"));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}
