//! Block type taxonomy
//!
//! The closed set of block type identifiers and the supported code
//! languages. New block types are added here and in the schema registry,
//! never by ad-hoc branching elsewhere.

use crate::errors::BlockError;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Block type identifier.
///
/// Thirty-one registered types plus `Unknown`, which carries the raw type
/// string of a block persisted by a newer (or foreign) writer. `Unknown`
/// is never produced by authoring flows; it exists so that loading does
/// not destroy data it cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockType {
    Text,
    Video,
    Image,
    Code,
    List,
    Divider,
    Poll,
    WordCloud,
    ChoiceComparison,
    Reflection,
    AiGenerator,
    Brainstorm,
    Debate,
    Discussion,
    CaseStudy,
    Scenario,
    RolePlay,
    JournalPrompt,
    ExitTicket,
    Icebreaker,
    GoalSetting,
    SelfAssessment,
    PeerFeedback,
    ThinkPairShare,
    SocraticPrompt,
    Prediction,
    Summarizer,
    Vocabulary,
    ResearchPrompt,
    Interview,
    QuickWrite,
    /// Unregistered type string from persisted data.
    Unknown(String),
}

impl BlockType {
    /// Get the persisted code for this block type.
    pub fn code(&self) -> &str {
        match self {
            BlockType::Text => "text",
            BlockType::Video => "video",
            BlockType::Image => "image",
            BlockType::Code => "code",
            BlockType::List => "list",
            BlockType::Divider => "divider",
            BlockType::Poll => "poll",
            BlockType::WordCloud => "wordCloud",
            BlockType::ChoiceComparison => "choiceComparison",
            BlockType::Reflection => "reflection",
            BlockType::AiGenerator => "aiGenerator",
            BlockType::Brainstorm => "brainstorm",
            BlockType::Debate => "debate",
            BlockType::Discussion => "discussion",
            BlockType::CaseStudy => "caseStudy",
            BlockType::Scenario => "scenario",
            BlockType::RolePlay => "rolePlay",
            BlockType::JournalPrompt => "journalPrompt",
            BlockType::ExitTicket => "exitTicket",
            BlockType::Icebreaker => "icebreaker",
            BlockType::GoalSetting => "goalSetting",
            BlockType::SelfAssessment => "selfAssessment",
            BlockType::PeerFeedback => "peerFeedback",
            BlockType::ThinkPairShare => "thinkPairShare",
            BlockType::SocraticPrompt => "socraticPrompt",
            BlockType::Prediction => "prediction",
            BlockType::Summarizer => "summarizer",
            BlockType::Vocabulary => "vocabulary",
            BlockType::ResearchPrompt => "researchPrompt",
            BlockType::Interview => "interview",
            BlockType::QuickWrite => "quickWrite",
            BlockType::Unknown(code) => code,
        }
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        match self {
            BlockType::Text => "Text",
            BlockType::Video => "Video",
            BlockType::Image => "Image",
            BlockType::Code => "Code",
            BlockType::List => "List",
            BlockType::Divider => "Divider",
            BlockType::Poll => "Poll",
            BlockType::WordCloud => "Word Cloud",
            BlockType::ChoiceComparison => "Choice Comparison",
            BlockType::Reflection => "Reflection",
            BlockType::AiGenerator => "AI Generator",
            BlockType::Brainstorm => "Brainstorm",
            BlockType::Debate => "Debate",
            BlockType::Discussion => "Discussion",
            BlockType::CaseStudy => "Case Study",
            BlockType::Scenario => "Scenario",
            BlockType::RolePlay => "Role Play",
            BlockType::JournalPrompt => "Journal Prompt",
            BlockType::ExitTicket => "Exit Ticket",
            BlockType::Icebreaker => "Icebreaker",
            BlockType::GoalSetting => "Goal Setting",
            BlockType::SelfAssessment => "Self Assessment",
            BlockType::PeerFeedback => "Peer Feedback",
            BlockType::ThinkPairShare => "Think-Pair-Share",
            BlockType::SocraticPrompt => "Socratic Prompt",
            BlockType::Prediction => "Prediction",
            BlockType::Summarizer => "Summarizer",
            BlockType::Vocabulary => "Vocabulary",
            BlockType::ResearchPrompt => "Research Prompt",
            BlockType::Interview => "Interview",
            BlockType::QuickWrite => "Quick Write",
            BlockType::Unknown(code) => code,
        }
    }

    /// Parse a persisted type code, admitting unregistered codes.
    ///
    /// Unlike [`FromStr`], this never fails: an unrecognized code becomes
    /// `Unknown`, so load paths can keep foreign blocks intact.
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|t| t.code() == code)
            .unwrap_or_else(|| BlockType::Unknown(code.to_string()))
    }

    /// Whether this type has a registered schema.
    pub fn is_registered(&self) -> bool {
        !matches!(self, BlockType::Unknown(_))
    }

    /// Whether this type renders a learner-facing input surface.
    ///
    /// All generic pedagogical types are interactive; so are polls and
    /// word clouds, which collect responses when published.
    pub fn is_interactive(&self) -> bool {
        !matches!(
            self,
            BlockType::Text
                | BlockType::Video
                | BlockType::Image
                | BlockType::Code
                | BlockType::List
                | BlockType::Divider
                | BlockType::Unknown(_)
        )
    }

    /// Whether this type uses the generic interactive content shape.
    pub fn uses_generic_content(&self) -> bool {
        self.is_interactive()
            && !matches!(
                self,
                BlockType::Poll | BlockType::WordCloud | BlockType::ChoiceComparison
            )
    }

    /// Get all registered block types.
    pub fn all() -> Vec<BlockType> {
        vec![
            BlockType::Text,
            BlockType::Video,
            BlockType::Image,
            BlockType::Code,
            BlockType::List,
            BlockType::Divider,
            BlockType::Poll,
            BlockType::WordCloud,
            BlockType::ChoiceComparison,
            BlockType::Reflection,
            BlockType::AiGenerator,
            BlockType::Brainstorm,
            BlockType::Debate,
            BlockType::Discussion,
            BlockType::CaseStudy,
            BlockType::Scenario,
            BlockType::RolePlay,
            BlockType::JournalPrompt,
            BlockType::ExitTicket,
            BlockType::Icebreaker,
            BlockType::GoalSetting,
            BlockType::SelfAssessment,
            BlockType::PeerFeedback,
            BlockType::ThinkPairShare,
            BlockType::SocraticPrompt,
            BlockType::Prediction,
            BlockType::Summarizer,
            BlockType::Vocabulary,
            BlockType::ResearchPrompt,
            BlockType::Interview,
            BlockType::QuickWrite,
        ]
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BlockType {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_code(s) {
            BlockType::Unknown(code) => Err(BlockError::UnknownType(code)),
            t => Ok(t),
        }
    }
}

// Serialized as the bare code string so persisted blocks read
// `"type": "wordCloud"` and unknown codes survive a round-trip.
impl Serialize for BlockType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CodeVisitor;

        impl Visitor<'_> for CodeVisitor {
            type Value = BlockType;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a block type code string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<BlockType, E> {
                Ok(BlockType::from_code(v))
            }
        }

        deserializer.deserialize_str(CodeVisitor)
    }
}

/// Programming language of a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    /// General-purpose scripting default when sniffing finds no marker.
    #[default]
    Python,
    JavaScript,
    TypeScript,
    Java,
    CSharp,
    Go,
    Rust,
    Php,
    Sql,
    Html,
    Css,
    Shell,
}

impl CodeLanguage {
    /// Persisted codes, in declaration order.
    pub const CODES: &'static [&'static str] = &[
        "python",
        "javascript",
        "typescript",
        "java",
        "csharp",
        "go",
        "rust",
        "php",
        "sql",
        "html",
        "css",
        "shell",
    ];

    /// Get the persisted code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            CodeLanguage::Python => "python",
            CodeLanguage::JavaScript => "javascript",
            CodeLanguage::TypeScript => "typescript",
            CodeLanguage::Java => "java",
            CodeLanguage::CSharp => "csharp",
            CodeLanguage::Go => "go",
            CodeLanguage::Rust => "rust",
            CodeLanguage::Php => "php",
            CodeLanguage::Sql => "sql",
            CodeLanguage::Html => "html",
            CodeLanguage::Css => "css",
            CodeLanguage::Shell => "shell",
        }
    }

    /// Parse a persisted code, tolerating common aliases.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "python" | "py" => Some(CodeLanguage::Python),
            "javascript" | "js" => Some(CodeLanguage::JavaScript),
            "typescript" | "ts" => Some(CodeLanguage::TypeScript),
            "java" => Some(CodeLanguage::Java),
            "csharp" | "c#" | "cs" => Some(CodeLanguage::CSharp),
            "go" | "golang" => Some(CodeLanguage::Go),
            "rust" | "rs" => Some(CodeLanguage::Rust),
            "php" => Some(CodeLanguage::Php),
            "sql" => Some(CodeLanguage::Sql),
            "html" => Some(CodeLanguage::Html),
            "css" => Some(CodeLanguage::Css),
            "shell" | "sh" | "bash" | "zsh" => Some(CodeLanguage::Shell),
            _ => None,
        }
    }
}

impl std::fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeLanguage::Python => write!(f, "Python"),
            CodeLanguage::JavaScript => write!(f, "JavaScript"),
            CodeLanguage::TypeScript => write!(f, "TypeScript"),
            CodeLanguage::Java => write!(f, "Java"),
            CodeLanguage::CSharp => write!(f, "C#"),
            CodeLanguage::Go => write!(f, "Go"),
            CodeLanguage::Rust => write!(f, "Rust"),
            CodeLanguage::Php => write!(f, "PHP"),
            CodeLanguage::Sql => write!(f, "SQL"),
            CodeLanguage::Html => write!(f, "HTML"),
            CodeLanguage::Css => write!(f, "CSS"),
            CodeLanguage::Shell => write!(f, "Shell"),
        }
    }
}
