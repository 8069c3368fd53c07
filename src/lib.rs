//! Lectern: content block engine for course authoring
//!
//! The core of a block-based authoring platform: a typed block content
//! model, a best-effort normalizer for AI-generated input, a pure
//! validator, and render/edit dispatchers. Auth, upload transport, the
//! generation service, and persistence are external collaborators; the
//! crate only defines the shapes it trades with them.

pub mod block;
pub mod content;
pub mod edit;
pub mod errors;
pub mod render;
pub mod schema;
pub mod types;

// Re-export key types for convenience
pub use block::{Block, BlockId, Lesson, StoredBlock};
pub use content::normalize::{normalize, AuthorNote, Normalized};
pub use content::validate::{validate, FieldViolation, ValidationReport};
pub use content::BlockContent;
pub use edit::debounce::Debouncer;
pub use edit::generation::{
    CourseContext, GenerationRequest, GenerationRequestBuilder, GenerationTicket,
    InMemoryPreferences, PreferenceStore, ReadingLevel, Tone,
};
pub use edit::upload::{UploadState, UploadTracker};
pub use edit::{EditorSession, GenerationStatus, SavedContent};
pub use errors::BlockError;
pub use render::{render, render_lesson, RenderMode};
pub use schema::{default_content, schema_for, FieldKind, FieldSpec};
pub use types::{BlockType, CodeLanguage};
