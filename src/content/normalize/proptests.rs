//! Property tests for normalization invariants

use super::*;
use crate::types::BlockType;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    /// PROPERTY: alt text never exceeds 125 characters, whatever the input
    #[test]
    fn prop_alt_text_capped(alt in ".{0,400}") {
        let raw = json!({"imageUrl": "/img/x.png", "altText": alt});
        let normalized = normalize(&BlockType::Image, &raw, None);
        if let BlockContent::Image(image) = normalized.content {
            prop_assert!(image.alt_text.chars().count() <= 125);
        } else {
            prop_assert!(false, "expected image content");
        }
    }

    /// PROPERTY: poll options clamp to at most 10, preserving prefix order
    #[test]
    fn prop_poll_options_clamped(texts in proptest::collection::vec("[a-z]{1,12}", 0..30)) {
        let entries: Vec<serde_json::Value> =
            texts.iter().map(|t| json!(t)).collect();
        let normalized = normalize(&BlockType::Poll, &serde_json::Value::Array(entries), None);
        if let BlockContent::Poll(poll) = normalized.content {
            prop_assert!(poll.options.len() <= 10);
            let kept = texts.len().min(10);
            for (option, text) in poll.options.iter().zip(texts.iter().take(kept)) {
                prop_assert_eq!(&option.text, text);
            }
            prop_assert!(poll.options.iter().all(|o| o.votes == 0));
        } else {
            prop_assert!(false, "expected poll content");
        }
    }

    /// PROPERTY: list items clamp to at most 100 after blank filtering
    #[test]
    fn prop_list_items_clamped(lines in proptest::collection::vec(".{0,20}", 0..150)) {
        let raw = json!(lines);
        let normalized = normalize(&BlockType::List, &raw, None);
        if let BlockContent::List(list) = normalized.content {
            prop_assert!(list.items.len() <= 100);
            prop_assert!(list.items.iter().all(|i| !i.text.trim().is_empty()));
        } else {
            prop_assert!(false, "expected list content");
        }
    }

    /// PROPERTY: word values always land in 1..=100
    #[test]
    fn prop_word_values_in_range(value in -1000i64..1000) {
        let raw = json!({"words": [{"text": "anything", "value": value}]});
        let normalized = normalize(&BlockType::WordCloud, &raw, None);
        if let BlockContent::WordCloud(cloud) = normalized.content {
            prop_assert!(cloud.words[0].value >= 1 && cloud.words[0].value <= 100);
        } else {
            prop_assert!(false, "expected word cloud content");
        }
    }

    /// PROPERTY: normalization is idempotent for list content
    #[test]
    fn prop_list_normalization_idempotent(lines in proptest::collection::vec("[a-zA-Z ]{1,20}", 1..20)) {
        let first = normalize(&BlockType::List, &json!(lines), None);
        let second = normalize(&BlockType::List, &first.content.to_value(), Some(&first.content));
        prop_assert_eq!(first.content, second.content);
    }
}
