//! Property-based tests for vocabulary parsing.
//!
//! Uses `proptest` to check that whatever the parser accepts survives a
//! serialize → parse cycle unchanged, and that non-array input never parses.

use proptest::prelude::*;

use kotoba_core::error::CoreError;
use kotoba_core::parser::parse_vocabulary;
use kotoba_core::types::{Part, VocabularyItem, VocabularyList};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_unit() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("新".to_string()),
        Just("し".to_string()),
        Just("い".to_string()),
        Just("雨".to_string()),
        Just("天気".to_string()),
        "[\\p{Han}\\p{Hiragana}\\p{Katakana}]{1,2}",
    ]
}

fn arb_part() -> impl Strategy<Value = Part> {
    (arb_unit(), prop::collection::vec("[a-z]{1,3}", 1..4))
        .prop_map(|(kanji, romaji)| Part { kanji, romaji })
}

fn arb_item() -> impl Strategy<Value = VocabularyItem> {
    (prop::collection::vec(arb_part(), 1..4), "[ -~]{0,20}").prop_map(|(parts, english)| {
        let kanji = parts.iter().map(|p| p.kanji.as_str()).collect::<String>();
        let romaji = parts.iter().map(Part::reading).collect::<String>();
        VocabularyItem {
            kanji,
            romaji,
            english,
            parts,
        }
    })
}

fn arb_list() -> impl Strategy<Value = VocabularyList> {
    prop::collection::vec(arb_item(), 0..8).prop_map(VocabularyList)
}

// ---------------------------------------------------------------------------
// Property: serialize → parse yields an equal list
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn compact_json_round_trips(list in arb_list()) {
        let json = serde_json::to_string(&list).expect("serialize");
        let parsed = parse_vocabulary(&json).expect("parse");
        prop_assert_eq!(parsed, list);
    }

    #[test]
    fn pretty_json_round_trips(list in arb_list()) {
        let json = list.to_pretty_json().expect("serialize");
        let parsed = parse_vocabulary(&json).expect("parse");
        prop_assert_eq!(parsed, list);
    }

    #[test]
    fn generated_items_are_consistent(item in arb_item()) {
        prop_assert!(item.segmentation().is_consistent());
    }
}

// ---------------------------------------------------------------------------
// Property: only arrays parse
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn single_object_never_parses(item in arb_item()) {
        let json = serde_json::to_string(&item).expect("serialize");
        let is_parse_error = matches!(parse_vocabulary(&json), Err(CoreError::Parse { .. }));
        prop_assert!(is_parse_error);
    }

    #[test]
    fn appended_prose_never_parses(list in arb_list(), prose in "[A-Za-z][A-Za-z !.]{0,30}") {
        let json = format!("{}\n{prose}", serde_json::to_string(&list).expect("serialize"));
        prop_assert!(parse_vocabulary(&json).is_err());
    }
}
