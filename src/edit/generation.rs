//! Generation request building
//!
//! Assembles structured requests for the external generation
//! collaborator. Per-user style preferences come from an injected
//! store; they are configuration and never leak into block content.
//! Course context is opaque pass-through used only to enrich requests.

use crate::schema::schema_for;
use crate::types::BlockType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifies one in-flight generation request within an editor
/// session. A result whose ticket is no longer current is stale and
/// must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(pub(crate) u64);

/// Writing tone preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Friendly,
    Professional,
    Academic,
    Playful,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Professional => "professional",
            Tone::Academic => "academic",
            Tone::Playful => "playful",
        }
    }
}

/// Target reading level preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingLevel {
    Elementary,
    MiddleSchool,
    #[default]
    HighSchool,
    College,
}

impl ReadingLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ReadingLevel::Elementary => "elementary",
            ReadingLevel::MiddleSchool => "middle-school",
            ReadingLevel::HighSchool => "high-school",
            ReadingLevel::College => "college",
        }
    }
}

/// Per-user style preferences, injected into the request builder.
pub trait PreferenceStore {
    fn tone(&self, user_id: &str) -> Option<Tone>;
    fn reading_level(&self, user_id: &str) -> Option<ReadingLevel>;
}

/// Simple map-backed preference store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    tones: HashMap<String, Tone>,
    reading_levels: HashMap<String, ReadingLevel>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tone(&mut self, user_id: impl Into<String>, tone: Tone) {
        self.tones.insert(user_id.into(), tone);
    }

    pub fn set_reading_level(&mut self, user_id: impl Into<String>, level: ReadingLevel) {
        self.reading_levels.insert(user_id.into(), level);
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn tone(&self, user_id: &str) -> Option<Tone> {
        self.tones.get(user_id).copied()
    }

    fn reading_level(&self, user_id: &str) -> Option<ReadingLevel> {
        self.reading_levels.get(user_id).copied()
    }
}

/// Read-only context from the course-structure collaborator. Treated
/// as opaque text; the core never interprets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseContext {
    pub course_title: Option<String>,
    pub module_title: Option<String>,
    pub lesson_title: Option<String>,
    /// Short summaries of sibling blocks already on the page.
    pub sibling_summaries: Vec<String>,
}

/// A fully assembled generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub block_type: BlockType,
    pub prompt: String,
}

/// Builder for generation requests.
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    block_type: BlockType,
    instructions: Option<String>,
    context: CourseContext,
    tone: Tone,
    reading_level: ReadingLevel,
}

impl GenerationRequestBuilder {
    /// Start a request for one block type.
    pub fn new(block_type: BlockType) -> Self {
        Self {
            block_type,
            instructions: None,
            context: CourseContext::default(),
            tone: Tone::default(),
            reading_level: ReadingLevel::default(),
        }
    }

    /// Author's free-text instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Attach course context pass-through.
    pub fn with_context(mut self, context: CourseContext) -> Self {
        self.context = context;
        self
    }

    /// Pull the requesting user's style preferences from the store.
    pub fn with_preferences(mut self, store: &dyn PreferenceStore, user_id: &str) -> Self {
        if let Some(tone) = store.tone(user_id) {
            self.tone = tone;
        }
        if let Some(level) = store.reading_level(user_id) {
            self.reading_level = level;
        }
        self
    }

    /// Assemble the request prompt.
    pub fn build(self) -> GenerationRequest {
        let mut prompt = String::new();
        prompt.push_str(&format!(
            "Generate content for a {} block.\n",
            self.block_type.name()
        ));
        if let Some(instructions) = &self.instructions {
            prompt.push_str(&format!("\nInstructions: {}\n", instructions));
        }

        let has_context = self.context.course_title.is_some()
            || self.context.module_title.is_some()
            || self.context.lesson_title.is_some()
            || !self.context.sibling_summaries.is_empty();
        if has_context {
            prompt.push_str("\n## Course context\n");
            if let Some(course) = &self.context.course_title {
                prompt.push_str(&format!("Course: {}\n", course));
            }
            if let Some(module) = &self.context.module_title {
                prompt.push_str(&format!("Module: {}\n", module));
            }
            if let Some(lesson) = &self.context.lesson_title {
                prompt.push_str(&format!("Lesson: {}\n", lesson));
            }
            for summary in &self.context.sibling_summaries {
                prompt.push_str(&format!("- {}\n", summary));
            }
        }

        prompt.push_str("\n## Style\n");
        prompt.push_str(&format!("Tone: {}\n", self.tone.label()));
        prompt.push_str(&format!("Reading level: {}\n", self.reading_level.label()));

        if self.block_type.is_registered() {
            let fields: Vec<&str> = schema_for(&self.block_type)
                .iter()
                .map(|spec| spec.name)
                .collect();
            if !fields.is_empty() {
                prompt.push_str(&format!(
                    "\nRespond with JSON using the fields: {}\n",
                    fields.join(", ")
                ));
            }
        }

        GenerationRequest {
            block_type: self.block_type,
            prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_includes_schema_fields() {
        let request = GenerationRequestBuilder::new(BlockType::Poll).build();
        assert!(request.prompt.contains("Poll block"));
        assert!(request.prompt.contains("question"));
        assert!(request.prompt.contains("options"));
    }

    #[test]
    fn test_builder_applies_user_preferences() {
        let mut prefs = InMemoryPreferences::new();
        prefs.set_tone("author-7", Tone::Academic);
        prefs.set_reading_level("author-7", ReadingLevel::College);

        let request = GenerationRequestBuilder::new(BlockType::Text)
            .with_preferences(&prefs, "author-7")
            .build();
        assert!(request.prompt.contains("Tone: academic"));
        assert!(request.prompt.contains("Reading level: college"));
    }

    #[test]
    fn test_builder_defaults_when_no_preferences() {
        let prefs = InMemoryPreferences::new();
        let request = GenerationRequestBuilder::new(BlockType::Text)
            .with_preferences(&prefs, "unseen-user")
            .build();
        assert!(request.prompt.contains("Tone: friendly"));
        assert!(request.prompt.contains("Reading level: high-school"));
    }

    #[test]
    fn test_builder_passes_course_context_through() {
        let context = CourseContext {
            course_title: Some("Systems Programming".to_string()),
            module_title: Some("Memory".to_string()),
            lesson_title: Some("Ownership".to_string()),
            sibling_summaries: vec!["Text block introducing the borrow checker".to_string()],
        };
        let request = GenerationRequestBuilder::new(BlockType::Reflection)
            .with_instructions("Ask about a time they fought the borrow checker")
            .with_context(context)
            .build();
        assert!(request.prompt.contains("Course: Systems Programming"));
        assert!(request.prompt.contains("borrow checker"));
        assert!(request.prompt.contains("Instructions:"));
    }
}
