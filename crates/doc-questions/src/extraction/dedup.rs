//! First-occurrence deduplication of question candidates

use std::collections::HashSet;

use super::trim_line;

/// Comparison key for a candidate: trimmed and lowercased.
pub fn normalized_key(candidate: &str) -> String {
    trim_line(candidate).to_lowercase()
}

/// Drop candidates whose normalized key was already seen.
///
/// The first variant of each key is kept verbatim; order of first
/// occurrences is preserved.
pub fn remove_duplicates<I, S>(candidates: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(normalized_key(candidate.as_ref())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_key() {
        assert_eq!(normalized_key("  What Is X?\t"), "what is x?");
        assert_eq!(normalized_key("1. What is X?"), "1. what is x?");
        assert_eq!(normalized_key("ÉTÉ?"), "été?");
    }

    #[test]
    fn test_byte_order_mark_ignored_in_key() {
        assert_eq!(normalized_key("\u{FEFF}What? "), "what?");
        let unique = remove_duplicates(vec!["\u{FEFF}What?", "what?"]);
        assert_eq!(unique, vec!["\u{FEFF}What?"]);
    }

    #[test]
    fn test_case_and_whitespace_collapse() {
        let unique = remove_duplicates(vec!["What?", "what?", " What? "]);
        assert_eq!(unique, vec!["What?"]);

        let unique = remove_duplicates(vec![" What? ", "What?"]);
        assert_eq!(unique, vec![" What? "]);
    }

    #[test]
    fn test_prefix_is_part_of_key() {
        let unique = remove_duplicates(vec!["1. What is X?", "What is X?", "b) Another one"]);
        assert_eq!(unique, vec!["1. What is X?", "What is X?", "b) Another one"]);
    }

    #[test]
    fn test_preserves_first_occurrence_order() {
        let unique = remove_duplicates(vec!["b?", "a?", "B?", "c?", "A?"]);
        assert_eq!(unique, vec!["b?", "a?", "c?"]);
    }

    #[test]
    fn test_owned_strings() {
        let input: Vec<String> = vec!["Q?".into(), "q?".into()];
        let unique = remove_duplicates(input);
        assert_eq!(unique, vec!["Q?".to_string()]);
    }

    #[test]
    fn test_empty() {
        assert!(remove_duplicates(Vec::<&str>::new()).is_empty());
    }
}
