//! Question extraction and deduplication over raw document text
//!
//! Both stages are pure functions: they never fail and keep no state between
//! calls. Extraction order is preserved end to end, so "first occurrence" in
//! deduplication means first in the concatenated upload text.

mod dedup;
mod questions;

/// Trim surrounding whitespace, treating a byte order mark (U+FEFF) as
/// whitespace too.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub use dedup::{normalized_key, remove_duplicates};
pub use questions::{extract_questions, has_list_prefix, has_question_suffix, is_question_line};
