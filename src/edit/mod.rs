//! Edit dispatch
//!
//! Maps a block to its editing surface. A session initializes from the
//! block's current content, accepts direct edits or normalizer output
//! from generation results, and emits a complete replacement content
//! value on save, never a partial patch. Repeating fields enforce
//! their count bounds at this boundary, ahead of the validator.

pub mod debounce;
pub mod generation;
pub mod upload;

use crate::block::{Block, BlockId};
use crate::content::normalize::{normalize, AuthorNote};
use crate::content::validate::validate;
use crate::content::{BlockContent, Choice, ListItem, PollOption, WordEntry};
use crate::errors::BlockError;
use crate::schema::{
    CHOICES_MAX, CHOICES_MIN, LIST_ITEMS_MAX, LIST_ITEMS_MIN, POLL_OPTIONS_MAX, POLL_OPTIONS_MIN,
    WORDS_MAX, WORDS_MIN, WORD_VALUE_DEFAULT,
};
use crate::types::BlockType;
use self::generation::GenerationTicket;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

/// Outcome of offering a generation result to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    /// The result was normalized into the draft.
    Applied,
    /// The ticket was no longer current; nothing changed.
    Stale,
}

/// Complete replacement value emitted by a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedContent {
    pub content: BlockContent,
    /// Additive meta entries accumulated during the session
    /// (e.g. extracted discussion questions).
    pub meta: IndexMap<String, Value>,
}

/// One author's editing session over one block.
#[derive(Debug, Clone)]
pub struct EditorSession {
    block_id: BlockId,
    block_type: BlockType,
    draft: BlockContent,
    draft_meta: IndexMap<String, Value>,
    notes: Vec<AuthorNote>,
    current_ticket: u64,
}

impl EditorSession {
    /// Open an editor for a block.
    ///
    /// Blocks with unregistered types are refused: there is no schema to
    /// edit against, and opening one is a data-integrity signal.
    pub fn open(block: &Block) -> Result<Self, BlockError> {
        if !block.block_type.is_registered() {
            warn!(
                block_id = %block.id,
                block_type = %block.block_type.code(),
                "refusing to open editor for unregistered block type"
            );
            return Err(BlockError::UnknownType(block.block_type.code().to_string()));
        }
        Ok(Self {
            block_id: block.id.clone(),
            block_type: block.block_type.clone(),
            draft: block.content.clone(),
            draft_meta: IndexMap::new(),
            notes: Vec::new(),
            current_ticket: 0,
        })
    }

    pub fn block_id(&self) -> &BlockId {
        &self.block_id
    }

    pub fn block_type(&self) -> &BlockType {
        &self.block_type
    }

    /// Current draft content.
    pub fn draft(&self) -> &BlockContent {
        &self.draft
    }

    /// Ephemeral author-facing notes from the last generation result.
    pub fn notes(&self) -> &[AuthorNote] {
        &self.notes
    }

    /// Replace the draft wholesale. Field edits clone the draft, change
    /// one field, and pass the result back here; validation runs at save.
    pub fn set_draft(&mut self, content: BlockContent) {
        self.draft = content;
    }

    // ------------------------------------------------------------------
    // Repeating entries (poll options, list items, choices, cloud words)
    // ------------------------------------------------------------------

    /// Append an entry to the type's repeating field.
    pub fn add_entry(&mut self, text: impl Into<String>) -> Result<(), BlockError> {
        let text = text.into();
        match &mut self.draft {
            BlockContent::Poll(poll) => {
                check_max("options", poll.options.len(), POLL_OPTIONS_MIN, POLL_OPTIONS_MAX)?;
                let id = next_option_id(&poll.options);
                poll.options.push(PollOption::new(id, text));
            }
            BlockContent::List(list) => {
                check_max("items", list.items.len(), LIST_ITEMS_MIN, LIST_ITEMS_MAX)?;
                list.items.push(ListItem::new(text));
            }
            BlockContent::ChoiceComparison(comparison) => {
                check_max("choices", comparison.choices.len(), CHOICES_MIN, CHOICES_MAX)?;
                comparison.choices.push(Choice::new(text));
            }
            BlockContent::WordCloud(cloud) => {
                check_max("words", cloud.words.len(), WORDS_MIN, WORDS_MAX)?;
                cloud.words.push(WordEntry::new(text, WORD_VALUE_DEFAULT));
            }
            _ => return Err(BlockError::NoRepeatingField(self.block_type.code().to_string())),
        }
        Ok(())
    }

    /// Remove the entry at `index` from the type's repeating field.
    pub fn remove_entry(&mut self, index: usize) -> Result<(), BlockError> {
        match &mut self.draft {
            BlockContent::Poll(poll) => {
                check_index("options", index, poll.options.len())?;
                check_min("options", poll.options.len(), POLL_OPTIONS_MIN, POLL_OPTIONS_MAX)?;
                poll.options.remove(index);
            }
            BlockContent::List(list) => {
                check_index("items", index, list.items.len())?;
                check_min("items", list.items.len(), LIST_ITEMS_MIN, LIST_ITEMS_MAX)?;
                list.items.remove(index);
            }
            BlockContent::ChoiceComparison(comparison) => {
                check_index("choices", index, comparison.choices.len())?;
                check_min("choices", comparison.choices.len(), CHOICES_MIN, CHOICES_MAX)?;
                comparison.choices.remove(index);
            }
            BlockContent::WordCloud(cloud) => {
                check_index("words", index, cloud.words.len())?;
                check_min("words", cloud.words.len(), WORDS_MIN, WORDS_MAX)?;
                cloud.words.remove(index);
            }
            _ => return Err(BlockError::NoRepeatingField(self.block_type.code().to_string())),
        }
        Ok(())
    }

    /// Move an entry within the type's repeating field.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<(), BlockError> {
        match &mut self.draft {
            BlockContent::Poll(poll) => move_within("options", &mut poll.options, from, to),
            BlockContent::List(list) => move_within("items", &mut list.items, from, to),
            BlockContent::ChoiceComparison(comparison) => {
                move_within("choices", &mut comparison.choices, from, to)
            }
            BlockContent::WordCloud(cloud) => move_within("words", &mut cloud.words, from, to),
            _ => Err(BlockError::NoRepeatingField(self.block_type.code().to_string())),
        }
    }

    // ------------------------------------------------------------------
    // Generation results
    // ------------------------------------------------------------------

    /// Register a new generation request. Any result carrying an older
    /// ticket becomes stale from this point on.
    pub fn begin_generation(&mut self) -> GenerationTicket {
        self.current_ticket += 1;
        GenerationTicket(self.current_ticket)
    }

    /// Invalidate all outstanding generation requests (navigation away,
    /// explicit cancel). Results for them will be discarded on arrival.
    pub fn cancel_generation(&mut self) {
        self.current_ticket += 1;
    }

    /// Offer a generation result. Stale results are discarded without
    /// touching the draft; current results run through the normalizer.
    pub fn apply_generation(&mut self, ticket: GenerationTicket, raw: &Value) -> GenerationStatus {
        if ticket != GenerationTicket(self.current_ticket) {
            debug!(
                block_id = %self.block_id,
                "discarding stale generation result"
            );
            return GenerationStatus::Stale;
        }
        let normalized = normalize(&self.block_type, raw, Some(&self.draft));
        self.draft = normalized.content;
        self.draft_meta.extend(normalized.meta);
        self.notes = normalized.notes;
        GenerationStatus::Applied
    }

    // ------------------------------------------------------------------
    // Save
    // ------------------------------------------------------------------

    /// Validate and emit the complete replacement content. Poll vote
    /// counts are reset on every save. On failure the draft is kept so
    /// the author can fix the flagged fields.
    pub fn save(&mut self) -> Result<SavedContent, BlockError> {
        let mut content = self.draft.clone();
        if let BlockContent::Poll(poll) = &mut content {
            for option in &mut poll.options {
                option.votes = 0;
            }
        }
        let report = validate(&self.block_type, &content);
        if !report.is_valid() {
            return Err(BlockError::Validation(report));
        }
        Ok(SavedContent {
            content,
            meta: self.draft_meta.clone(),
        })
    }
}

fn check_max(field: &'static str, len: usize, min: usize, max: usize) -> Result<(), BlockError> {
    if len >= max {
        return Err(BlockError::EntryCountBound { field, len, min, max });
    }
    Ok(())
}

fn check_min(field: &'static str, len: usize, min: usize, max: usize) -> Result<(), BlockError> {
    if len <= min {
        return Err(BlockError::EntryCountBound { field, len, min, max });
    }
    Ok(())
}

fn check_index(field: &'static str, index: usize, len: usize) -> Result<(), BlockError> {
    if index >= len {
        return Err(BlockError::EntryIndex { field, index });
    }
    Ok(())
}

fn move_within<T>(
    field: &'static str,
    entries: &mut Vec<T>,
    from: usize,
    to: usize,
) -> Result<(), BlockError> {
    if from >= entries.len() {
        return Err(BlockError::EntryIndex { field, index: from });
    }
    if to >= entries.len() {
        return Err(BlockError::EntryIndex { field, index: to });
    }
    let entry = entries.remove(from);
    entries.insert(to, entry);
    Ok(())
}

/// Smallest `opt-N` id not already taken.
fn next_option_id(options: &[PollOption]) -> String {
    (1..)
        .map(|n| format!("opt-{}", n))
        .find(|candidate| !options.iter().any(|o| &o.id == candidate))
        .expect("unbounded range yields a free id")
}
