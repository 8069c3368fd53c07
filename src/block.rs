//! Block entity and lesson store
//!
//! A lesson is an ordered sequence of blocks. `order` is the only
//! relationship between blocks; values are unique but not necessarily
//! contiguous, and consumers must sort by `order` rather than relying
//! on array position. All content mutation is whole-value replacement
//! gated by the validator.

use crate::content::normalize::normalize;
use crate::content::validate::validate;
use crate::content::BlockContent;
use crate::errors::BlockError;
use crate::schema::default_content;
use crate::types::BlockType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

/// Gap between consecutive order values; leaves room for future
/// between-neighbor inserts without renumbering.
const ORDER_STEP: i64 = 10;

/// Opaque stable block identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(String);

impl BlockId {
    /// Mint a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an identifier issued elsewhere (typically by persistence).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The addressable unit of lesson content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub order: i64,
    pub content: BlockContent,
    /// Open, additive side-channel (e.g. poll discussion questions).
    /// Never required for validity.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub meta: IndexMap<String, Value>,
}

impl Block {
    /// Create a block with the registry's minimal valid default content.
    ///
    /// # Panics
    ///
    /// Authoring flows only create registered types; passing `Unknown`
    /// is a programming error (see [`default_content`]).
    pub fn new(block_type: BlockType) -> Self {
        let content = default_content(&block_type);
        Self {
            id: BlockId::generate(),
            block_type,
            order: 0,
            content,
            meta: IndexMap::new(),
        }
    }

    /// Replace the whole content value, admitting it through the
    /// validator first. Field-level edits are expressed as clone,
    /// change, replace.
    pub fn replace_content(&mut self, content: BlockContent) -> Result<(), BlockError> {
        let report = validate(&self.block_type, &content);
        if !report.is_valid() {
            return Err(BlockError::Validation(report));
        }
        self.content = content;
        Ok(())
    }
}

/// Persistence exchange shape for one block. The persistence
/// collaborator owns storage; this is only the record layout it trades
/// with the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub order: i64,
    #[serde(default)]
    pub content: Value,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub meta: IndexMap<String, Value>,
}

/// Ordered collection of blocks forming one lesson/page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Lesson {
    blocks: Vec<Block>,
}

impl Lesson {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    /// Blocks sorted by `order`. Storage order is not display order.
    pub fn blocks_ordered(&self) -> Vec<&Block> {
        let mut ordered: Vec<&Block> = self.blocks.iter().collect();
        ordered.sort_by_key(|b| b.order);
        ordered
    }

    /// Append a new block of `block_type` after the current last block.
    pub fn append(&mut self, block_type: BlockType) -> &Block {
        let next_order = self
            .blocks
            .iter()
            .map(|b| b.order)
            .max()
            .map_or(0, |max| max + ORDER_STEP);
        let mut block = Block::new(block_type);
        block.order = next_order;
        self.blocks.push(block);
        self.blocks.last().expect("block just appended")
    }

    /// Remove a block, returning it if present.
    pub fn remove(&mut self, id: &BlockId) -> Option<Block> {
        let index = self.blocks.iter().position(|b| &b.id == id)?;
        Some(self.blocks.remove(index))
    }

    /// Replace a block's content wholesale after validation.
    pub fn replace_content(
        &mut self,
        id: &BlockId,
        content: BlockContent,
    ) -> Result<(), BlockError> {
        let block = self
            .blocks
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| BlockError::BlockNotFound(id.to_string()))?;
        block.replace_content(content)
    }

    /// Merge additional entries into a block's meta side-channel.
    pub fn merge_meta(
        &mut self,
        id: &BlockId,
        entries: IndexMap<String, Value>,
    ) -> Result<(), BlockError> {
        let block = self
            .blocks
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| BlockError::BlockNotFound(id.to_string()))?;
        block.meta.extend(entries);
        Ok(())
    }

    /// Move a block to `position` within the display order, renumbering
    /// every block with stepped order values.
    pub fn move_block(&mut self, id: &BlockId, position: usize) -> Result<(), BlockError> {
        if self.get(id).is_none() {
            return Err(BlockError::BlockNotFound(id.to_string()));
        }
        let mut ids: Vec<BlockId> = self.blocks_ordered().iter().map(|b| b.id.clone()).collect();
        let from = ids.iter().position(|i| i == id).expect("id checked above");
        let moved = ids.remove(from);
        let to = position.min(ids.len());
        ids.insert(to, moved);
        for (i, ordered_id) in ids.iter().enumerate() {
            if let Some(block) = self.blocks.iter_mut().find(|b| &b.id == ordered_id) {
                block.order = (i as i64 + 1) * ORDER_STEP;
            }
        }
        Ok(())
    }

    /// Build a lesson from persisted records.
    ///
    /// Content runs through the normalizer (a no-op for conformant
    /// values) so the schema invariant holds on load. Blocks with
    /// unregistered types are kept verbatim and flagged as a
    /// data-integrity signal, not rejected: dropping them would destroy
    /// author data on version skew.
    pub fn from_stored(records: Vec<StoredBlock>) -> Self {
        let mut blocks = Vec::with_capacity(records.len());
        for record in records {
            let block_type = BlockType::from_code(&record.block_type);
            if !block_type.is_registered() {
                warn!(
                    block_id = %record.id,
                    block_type = %record.block_type,
                    "loaded block with unregistered type"
                );
            }
            let normalized = normalize(&block_type, &record.content, None);
            let mut meta = record.meta;
            meta.extend(normalized.meta);

            let report = validate(&block_type, &normalized.content);
            if block_type.is_registered() && !report.is_valid() {
                warn!(
                    block_id = %record.id,
                    block_type = %record.block_type,
                    violations = %report,
                    "loaded block fails validation; editor must resolve before save"
                );
            }
            blocks.push(Block {
                id: BlockId::new(record.id),
                block_type,
                order: record.order,
                content: normalized.content,
                meta,
            });
        }
        Self { blocks }
    }

    /// Export the lesson as persistence records, in display order.
    pub fn to_stored(&self) -> Vec<StoredBlock> {
        self.blocks_ordered()
            .into_iter()
            .map(|block| StoredBlock {
                id: block.id.to_string(),
                block_type: block.block_type.code().to_string(),
                order: block.order,
                content: block.content.to_value(),
                meta: block.meta.clone(),
            })
            .collect()
    }
}
