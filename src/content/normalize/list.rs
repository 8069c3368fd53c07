//! List heuristics
//!
//! Prose-to-items segmentation, leading-marker stripping, and list
//! style inference. Inference runs only when the payload carries no
//! explicit `listType`; an explicit style always wins.

use crate::content::{ListItem, ListStyle};

/// Step/sequence vocabulary that marks a numbered list.
const SEQUENCE_VOCABULARY: &[&str] = &["step", "first", "second", "then", "finally"];

/// Task vocabulary that marks a checklist.
const TASK_VOCABULARY: &[&str] = &["checklist", "task", "todo", "complete"];

/// Leading bullet markers stripped from prose lines.
const BULLET_MARKERS: &[&str] = &["- ", "* ", "• "];

/// Leading checkbox markers stripped from prose lines.
const CHECKBOX_MARKERS: &[&str] = &["[ ]", "[x]", "[X]"];

/// Split a prose blob into item texts: one item per non-blank line,
/// with a single leading marker stripped.
pub(crate) fn split_prose_items(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| strip_marker(line).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip one leading list marker: `- `, `* `, `• `, `[ ]`/`[x]`,
/// `1.`-style numbers, or `a.`-style letters. At most one marker is
/// removed; the caller trims the remainder.
pub(crate) fn strip_marker(line: &str) -> &str {
    let t = line.trim_start();
    for marker in BULLET_MARKERS {
        if let Some(rest) = t.strip_prefix(marker) {
            return rest;
        }
    }
    for marker in CHECKBOX_MARKERS {
        if let Some(rest) = t.strip_prefix(marker) {
            return rest;
        }
    }
    let digits = t.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = t[digits..].strip_prefix('.') {
            return rest;
        }
    }
    let mut chars = t.chars();
    if let (Some(letter), Some('.')) = (chars.next(), chars.next()) {
        if letter.is_ascii_lowercase() {
            return &t[2..];
        }
    }
    t
}

/// Infer the list style from item text vocabulary and checkbox signals.
/// First match wins: sequence vocabulary, then task signals, then bullet.
pub(crate) fn infer_style(items: &[ListItem], saw_checked: bool) -> ListStyle {
    let joined = items
        .iter()
        .map(|item| item.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    if SEQUENCE_VOCABULARY.iter().any(|word| joined.contains(word)) {
        return ListStyle::Numbered;
    }
    let has_checked = saw_checked || items.iter().any(|item| item.checked.is_some());
    if has_checked || TASK_VOCABULARY.iter().any(|word| joined.contains(word)) {
        return ListStyle::Checkbox;
    }
    ListStyle::Bullet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_marker_bullets() {
        assert_eq!(strip_marker("- Buy milk"), "Buy milk");
        assert_eq!(strip_marker("* Buy milk"), "Buy milk");
        assert_eq!(strip_marker("• Buy milk"), "Buy milk");
    }

    #[test]
    fn test_strip_marker_numbers_and_letters() {
        assert_eq!(strip_marker("1. Call Sam").trim(), "Call Sam");
        assert_eq!(strip_marker("12. Call Sam").trim(), "Call Sam");
        assert_eq!(strip_marker("a. Call Sam").trim(), "Call Sam");
        // Uppercase letters are not markers.
        assert_eq!(strip_marker("A. Call Sam"), "A. Call Sam");
    }

    #[test]
    fn test_strip_marker_checkboxes() {
        assert_eq!(strip_marker("[ ] Done").trim(), "Done");
        assert_eq!(strip_marker("[x] Done").trim(), "Done");
        assert_eq!(strip_marker("[X] Done").trim(), "Done");
    }

    #[test]
    fn test_strip_marker_only_once() {
        // One marker per line; the nested checkbox survives.
        assert_eq!(strip_marker("- [x] Done"), "[x] Done");
    }

    #[test]
    fn test_strip_marker_plain_line_untouched() {
        assert_eq!(strip_marker("No markers here."), "No markers here.");
        assert_eq!(strip_marker("3:30 meeting"), "3:30 meeting");
    }

    #[test]
    fn test_split_prose_items_drops_blanks() {
        let items = split_prose_items("- Buy milk\n\n1. Call Sam\n   \n[x] Done");
        assert_eq!(items, vec!["Buy milk", "Call Sam", "Done"]);
    }

    #[test]
    fn test_infer_style_sequence_vocabulary() {
        let items = vec![
            ListItem::new("Step 1: mix the batter"),
            ListItem::new("Step 2: preheat the oven"),
        ];
        assert_eq!(infer_style(&items, false), ListStyle::Numbered);
    }

    #[test]
    fn test_infer_style_task_vocabulary() {
        let items = vec![ListItem::new("Task: finish report")];
        assert_eq!(infer_style(&items, false), ListStyle::Checkbox);
    }

    #[test]
    fn test_infer_style_checked_flag() {
        let items = vec![ListItem {
            text: "Ship release".to_string(),
            checked: Some(true),
        }];
        assert_eq!(infer_style(&items, false), ListStyle::Checkbox);
        assert_eq!(infer_style(&[ListItem::new("Ship release")], true), ListStyle::Checkbox);
    }

    #[test]
    fn test_infer_style_default_bullet() {
        let items = vec![
            ListItem::new("Apples"),
            ListItem::new("Oranges"),
            ListItem::new("Pears"),
        ];
        assert_eq!(infer_style(&items, false), ListStyle::Bullet);
    }

    #[test]
    fn test_infer_style_sequence_beats_task() {
        let items = vec![ListItem::new("First task of the sprint")];
        assert_eq!(infer_style(&items, false), ListStyle::Numbered);
    }
}
