//! Heuristic question line detection

use once_cell::sync::Lazy;
use regex::Regex;

use super::trim_line;

/// Enumerated-list prefix: `1.`, `42.`, `a)`, `B)`
static LIST_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]+\.|[A-Za-z]\))").expect("list prefix pattern is valid")
});

/// Whether a trimmed line ends with a question mark
pub fn has_question_suffix(trimmed: &str) -> bool {
    trimmed.ends_with('?')
}

/// Whether a trimmed line starts with an enumerated-list marker.
///
/// Lines that are only a marker (`"42."`) match too.
pub fn has_list_prefix(trimmed: &str) -> bool {
    LIST_PREFIX.is_match(trimmed)
}

/// Classify a single line. Whitespace-only lines are never questions.
pub fn is_question_line(line: &str) -> bool {
    let trimmed = trim_line(line);
    if trimmed.is_empty() {
        return false;
    }
    has_question_suffix(trimmed) || has_list_prefix(trimmed)
}

/// Select the lines of `raw_text` that look like questions.
///
/// Lines are split on `'\n'` only and returned untrimmed, in input order.
pub fn extract_questions(raw_text: &str) -> Vec<&str> {
    raw_text
        .split('\n')
        .filter(|line| is_question_line(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_suffix() {
        assert!(has_question_suffix("What is X?"));
        assert!(has_question_suffix("?"));
        assert!(!has_question_suffix("What is X? No."));
    }

    #[test]
    fn test_list_prefix() {
        assert!(has_list_prefix("1. Define entropy"));
        assert!(has_list_prefix("42."));
        assert!(has_list_prefix("123.no space"));
        assert!(has_list_prefix("a) first option"));
        assert!(has_list_prefix("Z)"));

        assert!(!has_list_prefix("hello world"));
        assert!(!has_list_prefix("ab) two letters"));
        assert!(!has_list_prefix("1) paren after digit"));
        assert!(!has_list_prefix("a. dot after letter"));
        assert!(!has_list_prefix("x 1. not at start"));
        assert!(!has_list_prefix("é) accented"));
        assert!(!has_list_prefix("٣. arabic-indic digit"));
    }

    #[test]
    fn test_is_question_line() {
        assert!(is_question_line("   Why?   "));
        assert!(is_question_line("\t2. Explain\r"));
        assert!(!is_question_line(""));
        assert!(!is_question_line("   \t  "));
        assert!(!is_question_line("plain statement."));
    }

    #[test]
    fn test_extract_keeps_original_text_and_order() {
        let text = "  Why?  \nprose\n\n3. Next\r\nb) option\nend.";
        let questions = extract_questions(text);
        assert_eq!(questions, vec!["  Why?  ", "3. Next\r", "b) option"]);
    }

    #[test]
    fn test_extract_reference_scenario() {
        let text = "1. What is X?\nsome prose\nWhat is X?\nb) Another one\n\n";
        assert_eq!(
            extract_questions(text),
            vec!["1. What is X?", "What is X?", "b) Another one"]
        );
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract_questions("").is_empty());
        assert!(extract_questions("\n\n   \n").is_empty());
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert!(is_question_line("\u{FEFF}1. Define entropy"));
        assert!(!is_question_line("\u{FEFF}"));
        assert_eq!(
            extract_questions("\u{FEFF}1. Define entropy\nprose"),
            vec!["\u{FEFF}1. Define entropy"]
        );
    }

    #[test]
    fn test_bare_marker_is_candidate() {
        assert_eq!(extract_questions("42.\nhello world"), vec!["42."]);
    }
}
