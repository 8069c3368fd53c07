//! Content validation
//!
//! Pure structural checks of a content value against the schema
//! registry. Validation never mutates content and collects every
//! violation instead of stopping at the first, so an editing surface
//! can highlight all problem fields at once.

use crate::content::BlockContent;
use crate::schema::{schema_for, FieldKind, FieldSpec};
use crate::types::BlockType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single field-level constraint violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field path, e.g. `question` or `options[2].text`
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl FieldViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result of validating one content value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    /// A report with no violations
    pub fn valid() -> Self {
        Self::default()
    }

    /// Whether the content passed every check
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// All collected violations, in field order
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether some violation touches the given field path
    pub fn flags_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, message));
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        let joined = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{} violation(s): {}", self.violations.len(), joined)
    }
}

/// Validate a content value against the schema for `block_type`.
pub fn validate(block_type: &BlockType, content: &BlockContent) -> ValidationReport {
    let mut report = ValidationReport::valid();

    if !block_type.is_registered() {
        report.push(
            "type",
            format!("no schema registered for block type \"{}\"", block_type.code()),
        );
        return report;
    }

    if !content.matches_type(block_type) {
        report.push(
            "content",
            format!(
                "expected {} content, found {}",
                block_type.code(),
                content.shape_label()
            ),
        );
        return report;
    }

    // Divider serializes to null and declares no fields.
    let value = content.to_value();
    let empty = Map::new();
    let object = value.as_object().unwrap_or(&empty);
    check_fields("", schema_for(block_type), object, &mut report);
    report
}

fn check_fields(prefix: &str, specs: &[FieldSpec], object: &Map<String, Value>, report: &mut ValidationReport) {
    for spec in specs {
        let path = if prefix.is_empty() {
            spec.name.to_string()
        } else {
            format!("{}.{}", prefix, spec.name)
        };
        match object.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    report.push(path, "required field is missing");
                }
            }
            Some(value) => check_value(&path, spec, value, report),
        }
    }
}

fn check_value(path: &str, spec: &FieldSpec, value: &Value, report: &mut ValidationReport) {
    match spec.kind {
        FieldKind::String => match value.as_str() {
            Some(s) => check_string(path, spec, s, report),
            None => report.push(path, "expected a string"),
        },
        FieldKind::Number => {
            if !value.is_number() {
                report.push(path, "expected a number");
            }
        }
        FieldKind::Bool => {
            if !value.is_boolean() {
                report.push(path, "expected a boolean");
            }
        }
        FieldKind::Map => {
            if !value.is_object() {
                report.push(path, "expected a key-value map");
            }
        }
        FieldKind::Enum(allowed) => match value.as_str() {
            Some(s) if allowed.contains(&s) => {}
            Some(s) => report.push(
                path,
                format!("\"{}\" is not one of: {}", s, allowed.join(", ")),
            ),
            None => report.push(path, "expected a string"),
        },
        FieldKind::Array(item_specs) => match value.as_array() {
            Some(items) => {
                if let Some(min) = spec.min_count {
                    if items.len() < min {
                        report.push(path, format!("needs at least {} entries, has {}", min, items.len()));
                    }
                }
                if let Some(max) = spec.max_count {
                    if items.len() > max {
                        report.push(path, format!("allows at most {} entries, has {}", max, items.len()));
                    }
                }
                for (i, item) in items.iter().enumerate() {
                    let item_path = format!("{}[{}]", path, i);
                    match item.as_object() {
                        Some(obj) => check_fields(&item_path, item_specs, obj, report),
                        None => report.push(item_path, "expected an object"),
                    }
                }
            }
            None => report.push(path, "expected an array"),
        },
    }
}

fn check_string(path: &str, spec: &FieldSpec, s: &str, report: &mut ValidationReport) {
    if spec.required && s.trim().is_empty() {
        report.push(path, "required field must not be blank");
        return;
    }
    let len = s.chars().count();
    if let Some(min) = spec.min_len {
        if len < min {
            report.push(path, format!("needs at least {} characters, has {}", min, len));
        }
    }
    if let Some(max) = spec.max_len {
        if len > max {
            report.push(path, format!("allows at most {} characters, has {}", max, len));
        }
    }
}
