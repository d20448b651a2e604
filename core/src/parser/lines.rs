//! # Line Merging
//!
//! Folds wrapped continuation lines into the entry they belong to, so that
//! each parameter, response or error is a single logical line.

use crate::error::{ParseError, ParseResult};
use crate::model::SectionKind;

/// Token that marks the start of a new entry.
const ENTRY_DELIMITER: &str = " -- ";

/// Splits raw buffer text into lines (`\n` and `\r\n` terminated).
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Merges raw lines into logical lines.
///
/// The first line always opens an entry. A later line opens a new entry
/// only if it contains ` -- ` once left-trimmed; otherwise it is appended to
/// the current entry after a single space.
pub fn merge_lines<S: AsRef<str>>(section: SectionKind, lines: &[S]) -> ParseResult<Vec<String>> {
    let (first, rest) = lines
        .split_first()
        .ok_or(ParseError::EmptyInput { section })?;

    let mut merged = vec![first.as_ref().trim().to_string()];
    for raw in rest {
        let raw = raw.as_ref();
        if raw.trim_start().contains(ENTRY_DELIMITER) {
            merged.push(raw.trim().to_string());
        } else if let Some(current) = merged.last_mut() {
            current.push(' ');
            current.push_str(raw.trim());
        }
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_continuation_folds_into_previous_entry() {
        let merged = merge_lines(SectionKind::Query, &["foo -- bar", "baz", "qux -- quux"]).unwrap();
        assert_eq!(merged, vec!["foo -- bar baz", "qux -- quux"]);
    }

    #[test]
    fn test_first_line_is_trimmed_even_without_delimiter() {
        let merged = merge_lines(SectionKind::Body, &["   payload  ", "  wrapped text  "]).unwrap();
        assert_eq!(merged, vec!["payload wrapped text"]);
    }

    #[test]
    fn test_indented_entries_start_new_lines() {
        let lines = split_lines("  a (int) -- one\n    b -- two\n      more");
        let merged = merge_lines(SectionKind::Path, &lines).unwrap();
        assert_eq!(merged, vec!["a (int) -- one", "b -- two more"]);
    }

    #[test]
    fn test_leading_delimiter_without_space_is_continuation() {
        let merged = merge_lines(SectionKind::Query, &["a -- one", "  -- dangling"]).unwrap();
        assert_eq!(merged, vec!["a -- one -- dangling"]);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let lines: [&str; 0] = [];
        assert_eq!(
            merge_lines(SectionKind::Header, &lines),
            Err(ParseError::EmptyInput {
                section: SectionKind::Header
            })
        );
    }

    #[test]
    fn test_split_handles_crlf() {
        assert_eq!(split_lines("a -- 1\r\nb -- 2"), vec!["a -- 1", "b -- 2"]);
        assert!(split_lines("").is_empty());
    }
}
