//! Block engine errors
//!
//! Error types for block admission, editing, and dispatch.

use crate::content::validate::ValidationReport;
use thiserror::Error;

/// Errors that can occur during block operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlockError {
    #[error("Unknown block type: {0}")]
    UnknownType(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("{field} holds {len} entries, allowed range is {min}..={max}")]
    EntryCountBound {
        field: &'static str,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("Entry index {index} out of bounds for {field}")]
    EntryIndex { field: &'static str, index: usize },

    #[error("{0} blocks have no repeating entries")]
    NoRepeatingField(String),

    #[error("Block not found: {0}")]
    BlockNotFound(String),
}
