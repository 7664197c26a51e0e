//! Property tests for question extraction and deduplication

use std::collections::HashSet;

use doc_questions::extraction::{extract_questions, normalized_key, remove_duplicates};
use proptest::prelude::*;

/// Lines drawn from a small vocabulary so duplicates and markers are common
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("What is X?".to_string()),
        Just("  what is x?  ".to_string()),
        Just("1. Define Y".to_string()),
        Just("b) option".to_string()),
        Just("42.".to_string()),
        Just("plain prose".to_string()),
        Just("   ".to_string()),
        Just(String::new()),
        "[ a-zA-Z0-9.?)]{0,12}",
    ]
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..24).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn extraction_never_exceeds_non_empty_lines(text in text_strategy()) {
        let non_empty = text.split('\n').filter(|l| !l.trim().is_empty()).count();
        prop_assert!(extract_questions(&text).len() <= non_empty);
    }

    #[test]
    fn extracted_lines_come_from_input_in_order(text in text_strategy()) {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut cursor = 0;
        for question in extract_questions(&text) {
            let offset = lines[cursor..].iter().position(|l| *l == question);
            prop_assert!(offset.is_some());
            cursor += offset.unwrap() + 1;
        }
    }

    #[test]
    fn dedup_is_idempotent(text in text_strategy()) {
        let once = remove_duplicates(extract_questions(&text));
        let twice = remove_duplicates(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dedup_keeps_each_key_once_at_first_occurrence(lines in prop::collection::vec(line_strategy(), 0..24)) {
        let unique = remove_duplicates(lines.iter().map(String::as_str));
        prop_assert!(unique.len() <= lines.len());

        let keys: HashSet<String> = unique.iter().map(|q| normalized_key(q)).collect();
        prop_assert_eq!(keys.len(), unique.len());

        // The i-th unique element is the first input element with its key.
        let mut seen = HashSet::new();
        let expected: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .filter(|l| seen.insert(normalized_key(l)))
            .collect();
        prop_assert_eq!(unique, expected);
    }
}

#[test]
fn empty_text_yields_no_questions() {
    assert!(extract_questions("").is_empty());
    assert!(remove_duplicates(extract_questions("")).is_empty());
}

#[test]
fn case_and_whitespace_variants_collapse() {
    let unique = remove_duplicates(extract_questions("What?\nwhat?\n What? "));
    assert_eq!(unique, vec!["What?"]);
}

#[test]
fn reference_scenario_keeps_distinct_prefixed_lines() {
    let text = "1. What is X?\nsome prose\nWhat is X?\nb) Another one\n\n";
    let candidates = extract_questions(text);
    assert_eq!(candidates, vec!["1. What is X?", "What is X?", "b) Another one"]);

    assert_eq!(normalized_key(candidates[0]), "1. what is x?");
    assert_eq!(normalized_key(candidates[1]), "what is x?");
    assert_eq!(remove_duplicates(candidates.clone()), candidates);
}
